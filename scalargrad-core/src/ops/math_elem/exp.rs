use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// `e^a`. Overflows to `+inf` for large inputs.
pub fn exp_op<T: ScalarNumeric>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)?.exp();
    graph.derive(value, Op::Exp, Operands::one(a))
}

/// d e^a/da = e^a, which is the node's own value.
pub(crate) fn exp_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    output: T,
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "exp")?;
    graph.accumulate_grad(a, output * upstream)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
