// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::backward_op::binary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `a - b` as a single node, with its own rule rather than `a + neg(b)`.
pub fn sub_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? - graph.value(b)?;
    graph.derive(value, Op::Sub, Operands::two(a, b))
}

/// d(a-b)/da = 1, d(a-b)/db = -1.
pub(crate) fn sub_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let (a, b) = binary(operands, "sub")?;
    graph.accumulate_grad(a, upstream)?;
    graph.accumulate_grad(b, -upstream)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
