use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer<T: ScalarNumeric> {
    /// Performs a single optimization step.
    ///
    /// Reads the gradient of every managed parameter and writes its new value
    /// back into the graph. Gradients are left as they are.
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Backward passes accumulate, so this is called before each one.
    fn zero_grad(&self, graph: &mut Graph<T>) -> Result<(), ScalarGradError> {
        graph.zero_grads(self.params())
    }

    /// Ids of the managed parameter leaves.
    fn params(&self) -> &[NodeId];

    fn learning_rate(&self) -> T;

    /// Replaces the learning rate, e.g. for a decay schedule.
    fn set_learning_rate(&mut self, lr: T) -> Result<(), ScalarGradError>;
}
