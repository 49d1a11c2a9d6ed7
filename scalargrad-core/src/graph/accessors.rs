// src/graph/accessors.rs
use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Operands};
use crate::ops::traits::ScalarNumeric;

impl<T: ScalarNumeric> Graph<T> {
    /// Returns the node behind `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, ScalarGradError> {
        let slot = self.slot(id)?;
        Ok(&self.nodes[slot])
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, ScalarGradError> {
        let slot = self.slot(id)?;
        Ok(&mut self.nodes[slot])
    }

    /// Forward value of the node.
    pub fn value(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    /// Gradient accumulated into the node by backward passes so far.
    pub fn grad(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op<T>, ScalarGradError> {
        Ok(self.node(id)?.op)
    }

    pub fn operands(&self, id: NodeId) -> Result<Operands, ScalarGradError> {
        Ok(self.node(id)?.operands)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, ScalarGradError> {
        Ok(self.node(id)?.label.as_deref())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Replaces the value of a leaf, e.g. a parameter after an optimizer step.
    ///
    /// Nodes already derived from the leaf keep their old value; the caller is
    /// expected to rewind them away before the next forward pass.
    pub fn set_leaf_value(&mut self, id: NodeId, value: T) -> Result<(), ScalarGradError> {
        let node = self.node_mut(id)?;
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf {
                index: id.index,
                op: node.op.name().to_string(),
            });
        }
        node.value = value;
        Ok(())
    }

    /// Values of several nodes, in order.
    pub fn values(&self, ids: &[NodeId]) -> Result<Vec<T>, ScalarGradError> {
        ids.iter().map(|&id| self.value(id)).collect()
    }
}
