// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::unary;
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

/// Records `a ^ k` for a constant exponent `k`.
///
/// The exponent is not a node and receives no gradient. A negative base with
/// a non-integer exponent yields NaN, as `powf` does.
pub fn pow_op<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    a: NodeId,
    k: T,
) -> Result<NodeId, ScalarGradError> {
    let value = graph.value(a)?.powf(k);
    graph.derive(value, Op::Pow(k), Operands::one(a))
}

/// d(a^k)/da = k * a^(k-1).
pub(crate) fn pow_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    operands: &[NodeId],
    k: T,
    upstream: T,
) -> Result<(), ScalarGradError> {
    let a = unary(operands, "pow")?;
    let base = graph.value(a)?;
    graph.accumulate_grad(a, k * base.powf(k - T::one()) * upstream)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
