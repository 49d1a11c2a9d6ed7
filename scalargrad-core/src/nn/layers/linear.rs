use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::{check_arity, Module};
use crate::nn::parameter::Parameter;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use rand::Rng;

/// A fully connected layer: `out_features` independent neurons over the same
/// `in_features` inputs.
#[derive(Debug, Clone)]
pub struct Linear {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    ///
    /// * `in_features` - Number of inputs of every neuron.
    /// * `out_features` - Number of neurons, i.e. of outputs.
    /// * `activation` - Non-linearity shared by all neurons.
    /// * `init` - Policy for every weight and bias, drawn from `rng` neuron by neuron.
    pub fn new<T, R>(
        graph: &mut Graph<T>,
        in_features: usize,
        out_features: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError>
    where
        T: ScalarNumeric,
        R: Rng + ?Sized,
    {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, in_features, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    /// Builds a layer from existing neurons; they must all share the same fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let in_features = neurons.first().map(Neuron::fan_in).unwrap_or(0);
        for neuron in &neurons {
            if neuron.fan_in() != in_features {
                return Err(ScalarGradError::InputArityMismatch {
                    expected: in_features,
                    actual: neuron.fan_in(),
                    module: "Linear".to_string(),
                });
            }
        }
        Ok(Linear {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl<T: ScalarNumeric> Module<T> for Linear {
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        check_arity(inputs, self.in_features, "Linear")?;
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn num_inputs(&self) -> usize {
        self.in_features
    }

    fn num_outputs(&self) -> usize {
        self.neurons.len()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons
            .iter()
            .flat_map(|n| Module::<T>::parameters(n))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in Module::<T>::named_parameters(neuron) {
                params.push((format!("neuron{}.{}", i, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module<T>> {
        self.neurons.iter().map(|n| n as &dyn Module<T>).collect()
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
