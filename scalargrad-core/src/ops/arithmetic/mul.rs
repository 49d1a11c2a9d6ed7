// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::binary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `a * b`.
pub fn mul_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? * graph.value(b)?;
    graph.derive(value, Op::Mul, Operands::two(a, b))
}

/// d(a*b)/da = b, d(a*b)/db = a.
pub(crate) fn mul_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let (a, b) = binary(operands, "mul")?;
    let (a_val, b_val) = (graph.value(a)?, graph.value(b)?);
    graph.accumulate_grad(a, b_val * upstream)?;
    graph.accumulate_grad(b, a_val * upstream)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
