// scalargrad-core/src/ops/arithmetic/scalar_mul.rs

use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `a * k` for a plain constant `k`; the constant is stored in the tag.
pub fn scalar_mul_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    k: T,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? * k;
    graph.derive(value, Op::ScalarMul(k), Operands::one(a))
}

pub(crate) fn scalar_mul_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    k: T,
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "scalar_mul")?;
    graph.accumulate_grad(a, k * upstream)
}

#[cfg(test)]
#[path = "scalar_mul_test.rs"]
mod tests;
