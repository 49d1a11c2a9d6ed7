// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `-a`.
pub fn neg_op<T: ScalarNumeric>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let value = -graph.value(a)?;
    graph.derive(value, Op::Neg, Operands::one(a))
}

pub(crate) fn neg_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "neg")?;
    graph.accumulate_grad(a, -upstream)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
