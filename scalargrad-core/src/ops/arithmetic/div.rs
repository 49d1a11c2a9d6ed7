// scalargrad-core/src/ops/arithmetic/div.rs

use crate::autograd::backward_op::binary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `a / b`.
///
/// No zero check: a zero denominator yields an IEEE infinity or NaN that
/// propagates through the rest of the graph.
pub fn div_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? / graph.value(b)?;
    graph.derive(value, Op::Div, Operands::two(a, b))
}

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b².
pub(crate) fn div_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let (a, b) = binary(operands, "div")?;
    let (a_val, b_val) = (graph.value(a)?, graph.value(b)?);
    graph.accumulate_grad(a, upstream / b_val)?;
    graph.accumulate_grad(b, -a_val / (b_val * b_val) * upstream)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
