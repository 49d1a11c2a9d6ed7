use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::Parameter;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use std::fmt::Debug;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module owns [`Parameter`] handles into a [`Graph`] and records its forward
/// computation into that same graph. It never stores intermediate nodes, so
/// rewinding the graph between passes leaves the module usable.
pub trait Module<T: ScalarNumeric>: Debug {
    /// Records the forward pass of the module on `inputs` and returns its outputs.
    ///
    /// Fails with `InputArityMismatch` when `inputs.len()` differs from
    /// [`Module::num_inputs`].
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError>;

    /// Number of inputs `forward` expects.
    fn num_inputs(&self) -> usize;

    /// Number of outputs `forward` returns.
    fn num_outputs(&self) -> usize;

    /// All learnable parameters of the module, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters along with hierarchical names (e.g. "0.neuron1.w2").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Direct child modules; empty for leaf modules.
    fn children(&self) -> Vec<&dyn Module<T>> {
        Vec::new()
    }

    /// Ids of all parameter leaves, in [`Module::parameters`] order.
    fn parameter_ids(&self) -> Vec<NodeId> {
        self.parameters().iter().map(|p| p.id()).collect()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self, graph: &mut Graph<T>) -> Result<(), ScalarGradError> {
        for param in self.parameters() {
            graph.zero_grad(param.id())?;
        }
        Ok(())
    }
}

/// Fails with `InputArityMismatch` unless `inputs` has `expected` entries.
pub(crate) fn check_arity(
    inputs: &[NodeId],
    expected: usize,
    module: &str,
) -> Result<(), ScalarGradError> {
    if inputs.len() != expected {
        return Err(ScalarGradError::InputArityMismatch {
            expected,
            actual: inputs.len(),
            module: module.to_string(),
        });
    }
    Ok(())
}
