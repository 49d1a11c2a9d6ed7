use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::{Activation, Linear};
use crate::nn::module::{check_arity, Module};
use crate::nn::parameter::Parameter;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use rand::Rng;

/// An ordered chain of modules; each module's outputs feed the next one.
#[derive(Debug)]
pub struct Sequential<T: ScalarNumeric> {
    modules: Vec<(String, Box<dyn Module<T>>)>,
}

impl<T: ScalarNumeric> Default for Sequential<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarNumeric> Sequential<T> {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    /// Builds a multi-layer perceptron: `n_in` inputs, then one `Linear` layer
    /// per entry of `sizes`, every neuron with a `tanh` activation.
    pub fn mlp<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        n_in: usize,
        sizes: &[usize],
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if sizes.is_empty() {
            return Err(ScalarGradError::EmptyInput {
                operation: "Sequential::mlp".to_string(),
            });
        }
        let mut model = Sequential::new();
        let mut fan_in = n_in;
        for &size in sizes {
            let layer = Linear::new(graph, fan_in, size, Activation::Tanh, init, rng)?;
            model.push(Box::new(layer))?;
            fan_in = size;
        }
        Ok(model)
    }

    /// Appends `module` under `name`.
    ///
    /// Its input count must match the previous module's output count.
    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        module: Box<dyn Module<T>>,
    ) -> Result<(), ScalarGradError> {
        let name = name.into();
        if let Some((_, last)) = self.modules.last() {
            if last.num_outputs() != module.num_inputs() {
                return Err(ScalarGradError::InputArityMismatch {
                    expected: last.num_outputs(),
                    actual: module.num_inputs(),
                    module: name,
                });
            }
        }
        self.modules.push((name, module));
        Ok(())
    }

    /// Appends `module`, named after its position.
    pub fn push(&mut self, module: Box<dyn Module<T>>) -> Result<(), ScalarGradError> {
        let name = self.modules.len().to_string();
        self.add_module(name, module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Creates one input leaf per value, runs the chain and returns the first output.
    pub fn forward_values(&self, graph: &mut Graph<T>, values: &[T]) -> Result<NodeId, ScalarGradError> {
        let inputs: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
        let outputs = self.forward(graph, &inputs)?;
        outputs
            .first()
            .copied()
            .ok_or_else(|| ScalarGradError::EmptyInput {
                operation: "Sequential::forward_values".to_string(),
            })
    }
}

impl<T: ScalarNumeric> Module<T> for Sequential<T> {
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        if !self.modules.is_empty() {
            check_arity(inputs, self.num_inputs(), "Sequential")?;
        }
        let mut current = inputs.to_vec();
        for (_, module) in &self.modules {
            current = module.forward(graph, &current)?;
        }
        Ok(current)
    }

    /// Input count of the first module. An empty chain returns its inputs unchanged.
    fn num_inputs(&self) -> usize {
        self.modules.first().map_or(0, |(_, m)| m.num_inputs())
    }

    fn num_outputs(&self) -> usize {
        self.modules.last().map_or(0, |(_, m)| m.num_outputs())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = Vec::new();
        for (_, module) in &self.modules {
            params.extend(module.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module<T>> {
        self.modules.iter().map(|(_, m)| m.as_ref()).collect()
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
