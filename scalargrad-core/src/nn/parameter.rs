use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use std::fmt;

/// A trainable leaf of a [`Graph`], with an optional name.
///
/// The value and gradient live in the graph; a `Parameter` is only the handle
/// a module keeps to find them again after every forward pass. Parameters must
/// be created before the graph is marked for rewinding, otherwise their ids go
/// stale with the rest of the expression.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter {
    id: NodeId,
    name: Option<String>,
}

impl Parameter {
    /// Creates a named leaf holding `value` and wraps it.
    ///
    /// The name is also used as the leaf's label in graph dumps.
    pub fn create<T: ScalarNumeric>(graph: &mut Graph<T>, value: T, name: Option<String>) -> Self {
        let id = match &name {
            Some(n) => graph.leaf_labeled(value, n.clone()),
            None => graph.leaf(value),
        };
        Parameter { id, name }
    }

    /// Wraps an existing leaf.
    pub fn new(id: NodeId, name: Option<String>) -> Self {
        Parameter { id, name }
    }

    pub fn new_unnamed(id: NodeId) -> Self {
        Parameter { id, name: None }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value<T: ScalarNumeric>(&self, graph: &Graph<T>) -> Result<T, ScalarGradError> {
        graph.value(self.id)
    }

    pub fn grad<T: ScalarNumeric>(&self, graph: &Graph<T>) -> Result<T, ScalarGradError> {
        graph.grad(self.id)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}, {})", name, self.id),
            None => write!(f, "Parameter({})", self.id),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
