// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::binary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

// --- Forward Operation ---

/// Records `a + b`.
///
/// `a` and `b` may be the same node; its gradient then receives both
/// contributions.
pub fn add_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)? + graph.value(b)?;
    graph.derive(value, Op::Add, Operands::two(a, b))
}

// --- Backward Operation ---

/// d(a+b)/da = d(a+b)/db = 1.
pub(crate) fn add_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    upstream: T,
) -> Result<(), ScalarGradError> {
    let (a, b) = binary(operands, "add")?;
    graph.accumulate_grad(a, upstream)?;
    graph.accumulate_grad(b, upstream)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
