use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Hyperbolic tangent. Saturates to ±1 for large inputs instead of overflowing.
pub fn tanh_op<T: ScalarNumeric>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)?.tanh();
    graph.derive(value, Op::Tanh, Operands::one(a))
}

/// d tanh(a)/da = 1 - t², with `t` the node's own value.
pub(crate) fn tanh_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    t: T,
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "tanh")?;
    graph.accumulate_grad(a, (T::one() - t * t) * upstream)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
