use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

// --- Forward Operation ---

/// Rectified Linear Unit: `max(0, a)`.
pub fn relu_op<T: ScalarNumeric>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let x = graph.value(a)?;
    let value = if x > T::zero() { x } else { T::zero() };
    graph.derive(value, Op::Relu, Operands::one(a))
}

// --- Backward Operation ---

/// Gradient flows only where the input was strictly positive (0 at the kink).
pub(crate) fn relu_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "relu")?;
    let slope = if graph.value(a)? > T::zero() {
        T::one()
    } else {
        T::zero()
    };
    graph.accumulate_grad(a, slope * upstream)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
