use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::activation::{relu, tanh};
use crate::ops::arithmetic::{add, div, mul, neg, pow, scalar_mul, sub};
use crate::ops::math_elem::exp;
use crate::ops::traits::ScalarNumeric;
use log::trace;
use std::fmt;

/// Tag of the primitive that produced a node.
///
/// The tag selects the local gradient rule applied by the backward pass, and
/// carries the constant operand of `ScalarMul` and `Pow`, which receives no
/// gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Input or parameter; no operands, no rule.
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    ScalarMul(T),
    Pow(T),
    Relu,
    Tanh,
    Exp,
}

impl<T> Op<T> {
    /// Number of node operands the primitive takes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Sub | Op::Mul | Op::Div => 2,
            Op::Neg | Op::ScalarMul(_) | Op::Pow(_) | Op::Relu | Op::Tanh | Op::Exp => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Neg => "neg",
            Op::ScalarMul(_) => "scalar_mul",
            Op::Pow(_) => "pow",
            Op::Relu => "relu",
            Op::Tanh => "tanh",
            Op::Exp => "exp",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Sub => write!(f, "-"),
            Op::Mul => write!(f, "*"),
            Op::Div => write!(f, "/"),
            Op::Neg => write!(f, "neg"),
            Op::ScalarMul(k) => write!(f, "*{}", k),
            Op::Pow(k) => write!(f, "pow {}", k),
            Op::Relu => write!(f, "relu"),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
        }
    }
}

/// Applies the local gradient rule of node `id`.
///
/// Reads the node's accumulated gradient and adds the scaled contributions
/// into its operands' gradients. Leaves are a no-op.
pub(crate) fn apply_backward<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    id: NodeId,
) -> Result<(), ScalarGradError> {
    let node = graph.node(id)?;
    let (op, operands, output, upstream) = (node.op, node.operands, node.value, node.grad);
    let operands = operands.as_slice();
    trace!("applying {} rule of {} (grad {})", op.name(), id, upstream);

    match op {
        Op::Leaf => Ok(()),
        Op::Add => add::add_backward(graph, operands, upstream),
        Op::Sub => sub::sub_backward(graph, operands, upstream),
        Op::Mul => mul::mul_backward(graph, operands, upstream),
        Op::Div => div::div_backward(graph, operands, upstream),
        Op::Neg => neg::neg_backward(graph, operands, upstream),
        Op::ScalarMul(k) => scalar_mul::scalar_mul_backward(graph, operands, k, upstream),
        Op::Pow(k) => pow::pow_backward(graph, operands, k, upstream),
        Op::Relu => relu::relu_backward(graph, operands, upstream),
        Op::Tanh => tanh::tanh_backward(graph, operands, output, upstream),
        Op::Exp => exp::exp_backward(graph, operands, output, upstream),
    }
}

/// Splits the operands of a unary node.
pub(crate) fn unary(operands: &[NodeId], op: &str) -> Result<NodeId, ScalarGradError> {
    match operands {
        [a] => Ok(*a),
        _ => Err(ScalarGradError::InternalError(format!(
            "'{}' node holds {} operands, expected 1",
            op,
            operands.len()
        ))),
    }
}

/// Splits the operands of a binary node.
pub(crate) fn binary(operands: &[NodeId], op: &str) -> Result<(NodeId, NodeId), ScalarGradError> {
    match operands {
        [a, b] => Ok((*a, *b)),
        _ => Err(ScalarGradError::InternalError(format!(
            "'{}' node holds {} operands, expected 2",
            op,
            operands.len()
        ))),
    }
}
