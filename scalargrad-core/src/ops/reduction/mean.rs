use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::scalar_mul_op;
use crate::ops::reduction::sum_op;
use crate::ops::traits::{cast, ScalarNumeric};

/// Arithmetic mean of `ids`: `sum(ids) * (1/n)`.
pub fn mean_op<T: ScalarNumeric>(graph: &mut Graph<T>, ids: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    if ids.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mean".to_string(),
        });
    }
    let total = sum_op(graph, ids)?;
    let inv_n = T::one() / cast::<T>(ids.len() as f64)?;
    scalar_mul_op(graph, total, inv_n)
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
