use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::add_op;
use crate::ops::traits::ScalarNumeric;

/// Sums `ids` by chaining `add` nodes onto a zero leaf, left to right.
///
/// An empty slice yields the zero leaf itself. No dedicated primitive is
/// recorded: the gradient reaches every term through the `add` rules.
pub fn sum_op<T: ScalarNumeric>(graph: &mut Graph<T>, ids: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    let mut acc = graph.leaf(T::zero());
    for &id in ids {
        acc = add_op(graph, acc, id)?;
    }
    Ok(acc)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
