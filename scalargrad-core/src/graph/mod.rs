// src/graph/mod.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Operands};
use crate::ops::traits::ScalarNumeric;
use log::trace;

mod accessors;
mod autograd_methods;
mod debug;
mod op_methods;

/// Arena owning every node of a computation graph.
///
/// Nodes reference their operands by [`NodeId`], and an operand always exists
/// before the node built from it, so the operand graph is acyclic by
/// construction. The arena only grows during a forward pass; [`Graph::rewind`]
/// discards everything allocated after a [`Mark`], which is how a training loop
/// drops last step's expression while keeping its parameter leaves.
///
/// `Graph` is a plain owned value: every mutation goes through `&mut self`, so
/// two backward passes can never race on the same graph.
#[derive(Debug, Clone)]
pub struct Graph<T: ScalarNumeric = f64> {
    pub(crate) nodes: Vec<Node<T>>,
    generation: u32,
}

/// A saved arena length, see [`Graph::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    len: usize,
}

impl Mark {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: ScalarNumeric> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarNumeric> Graph<T> {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            generation: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Number of nodes currently held by the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates an input or parameter node: no operands, no backward rule.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(Node::new(value, Op::Leaf, Operands::none(), self.generation))
    }

    /// Same as [`Graph::leaf`], with a label shown by [`Graph::dump`].
    pub fn leaf_labeled(&mut self, value: T, label: impl Into<String>) -> NodeId {
        let id = self.leaf(value);
        self.nodes[id.index].label = Some(label.into());
        id
    }

    /// Records a node produced by `op` from `operands`.
    ///
    /// Only the primitive ops call this; the backward rule is implied by `op`.
    pub(crate) fn derive(
        &mut self,
        value: T,
        op: Op<T>,
        operands: Operands,
    ) -> Result<NodeId, ScalarGradError> {
        if operands.len() != op.arity() {
            return Err(ScalarGradError::InternalError(format!(
                "'{}' expects {} operands, got {}",
                op.name(),
                op.arity(),
                operands.len()
            )));
        }
        for &operand in operands.as_slice() {
            self.slot(operand)?;
        }
        Ok(self.push(Node::new(value, op, operands, self.generation)))
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId {
            index: self.nodes.len(),
            generation: node.generation,
        };
        self.nodes.push(node);
        id
    }

    /// Returns a mark of the current arena length, to be passed to [`Graph::rewind`].
    pub fn mark(&self) -> Mark {
        Mark {
            len: self.nodes.len(),
        }
    }

    /// Drops every node allocated after `mark`.
    ///
    /// Ids of the dropped nodes become stale: using them afterwards yields
    /// `StaleNode` (or `NodeOutOfBounds` while their slot is still empty).
    /// Gradients of the surviving nodes are left as they are. A graph can be
    /// rewound `u32::MAX` times; past that `GenerationOverflow` is returned
    /// and the arena is left unchanged.
    pub fn rewind(&mut self, mark: Mark) -> Result<(), ScalarGradError> {
        if mark.len > self.nodes.len() {
            return Err(ScalarGradError::MarkOutOfRange {
                mark: mark.len,
                len: self.nodes.len(),
            });
        }
        let next = self
            .generation
            .checked_add(1)
            .ok_or(ScalarGradError::GenerationOverflow {
                generation: self.generation,
            })?;
        trace!(
            "Rewinding graph from {} to {} nodes (generation {} -> {})",
            self.nodes.len(),
            mark.len,
            self.generation,
            next
        );
        self.nodes.truncate(mark.len);
        self.generation = next;
        Ok(())
    }

    /// Validates `id` against this arena and returns its slot.
    pub(crate) fn slot(&self, id: NodeId) -> Result<usize, ScalarGradError> {
        let node = self
            .nodes
            .get(id.index)
            .ok_or(ScalarGradError::NodeOutOfBounds {
                index: id.index,
                len: self.nodes.len(),
            })?;
        if node.generation != id.generation {
            return Err(ScalarGradError::StaleNode {
                index: id.index,
                generation: id.generation,
                current: node.generation,
            });
        }
        Ok(id.index)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
