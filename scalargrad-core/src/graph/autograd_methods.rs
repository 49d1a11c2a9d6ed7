use crate::autograd::backward_op::apply_backward;
use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use log::debug;

impl<T: ScalarNumeric> Graph<T> {
    /// Performs the backward pass starting from `output`.
    ///
    /// Linearises the subgraph reachable from `output` in post-order, clears
    /// the gradients of its derived nodes, seeds `grad(output) = 1`, then
    /// applies each node's local rule in reverse order, so a node's rule only
    /// runs once every consumer has deposited its contribution.
    ///
    /// Leaf gradients are accumulated, never reset: zero the parameters (see
    /// [`Graph::zero_grads`]) before each optimisation step. Calling `backward`
    /// twice therefore doubles the leaf gradients. Nodes that are not
    /// reachable from `output` are left untouched.
    pub fn backward(&mut self, output: NodeId) -> Result<(), ScalarGradError> {
        let order = topological_sort(self, output)?;
        for &id in &order {
            let node = self.node_mut(id)?;
            if !node.is_leaf() {
                node.grad = T::zero();
            }
        }
        self.node_mut(output)?.grad = T::one();

        debug!(
            "backward from {}: {} reachable nodes out of {}",
            output,
            order.len(),
            self.len()
        );

        for &id in order.iter().rev() {
            apply_backward(self, id)?;
        }
        Ok(())
    }

    /// Post-order of the subgraph reachable from `output`: every node appears
    /// after all of its operands, `output` last.
    pub fn topological_order(&self, output: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        topological_sort(self, output)
    }

    /// Adds `delta` to the node's gradient.
    pub(crate) fn accumulate_grad(&mut self, id: NodeId, delta: T) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.grad += delta;
        Ok(())
    }

    pub fn zero_grad(&mut self, id: NodeId) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.grad = T::zero();
        Ok(())
    }

    pub fn zero_grads(&mut self, ids: &[NodeId]) -> Result<(), ScalarGradError> {
        for &id in ids {
            self.zero_grad(id)?;
        }
        Ok(())
    }

    /// Zeros every gradient held by the arena.
    pub fn zero_all_grads(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
