// src/node.rs

use crate::autograd::Op;
use crate::ops::traits::ScalarNumeric;
use std::fmt;

/// Identifier of a node inside a [`Graph`](crate::graph::Graph) arena.
///
/// An id is the node's slot index plus the arena generation it was allocated in.
/// Rewinding the arena bumps the generation, so ids of discarded nodes are
/// rejected instead of silently aliasing the nodes that reuse their slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// The (at most two) operands of a node, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Operands {
    ids: [NodeId; 2],
    len: u8,
}

impl Operands {
    pub(crate) fn none() -> Self {
        Self::default()
    }

    pub(crate) fn one(a: NodeId) -> Self {
        Operands {
            ids: [a, NodeId::default()],
            len: 1,
        }
    }

    pub(crate) fn two(a: NodeId, b: NodeId) -> Self {
        Operands { ids: [a, b], len: 2 }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A single scalar of the computation graph: its forward value, the gradient
/// accumulated for it by backward passes, and how it was produced.
///
/// The local backward rule is not stored on the node; it is selected from
/// [`Op`] when the backward engine reaches the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T: ScalarNumeric> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) operands: Operands,
    pub(crate) label: Option<String>,
    pub(crate) generation: u32,
}

impl<T: ScalarNumeric> Node<T> {
    pub(crate) fn new(value: T, op: Op<T>, operands: Operands, generation: u32) -> Self {
        Node {
            value,
            grad: T::zero(),
            op,
            operands,
            label: None,
            generation,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn op(&self) -> Op<T> {
        self.op
    }

    pub fn operands(&self) -> &[NodeId] {
        self.operands.as_slice()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Leaves have no operands and no backward rule.
    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}
