use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::{check_arity, Module};
use crate::nn::Parameter;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use rand::Rng;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity; no node is recorded.
    Linear,
}

impl Activation {
    pub fn apply<T: ScalarNumeric>(self, graph: &mut Graph<T>, x: NodeId) -> Result<NodeId, ScalarGradError> {
        match self {
            Activation::Tanh => graph.tanh(x),
            Activation::Relu => graph.relu(x),
            Activation::Linear => Ok(x),
        }
    }
}

/// A single unit computing `act(b + w0*x0 + w1*x1 + ...)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron over `fan_in` inputs, drawing every weight and the bias from `init`.
    pub fn new<T, R>(
        graph: &mut Graph<T>,
        fan_in: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError>
    where
        T: ScalarNumeric,
        R: Rng + ?Sized,
    {
        let bias = Parameter::create(graph, init.sample(rng)?, Some("b".to_string()));
        let mut weights = Vec::with_capacity(fan_in);
        for i in 0..fan_in {
            weights.push(Parameter::create(graph, init.sample(rng)?, Some(format!("w{}", i))));
        }
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Creates a neuron with the given weights and bias.
    pub fn from_values<T: ScalarNumeric>(
        graph: &mut Graph<T>,
        weights: &[T],
        bias: T,
        activation: Activation,
    ) -> Self {
        let bias = Parameter::create(graph, bias, Some("b".to_string()));
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Parameter::create(graph, w, Some(format!("w{}", i))))
            .collect();
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Records the neuron's output node.
    ///
    /// The sum starts from the bias and adds the products in input order.
    pub fn activate<T: ScalarNumeric>(
        &self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<NodeId, ScalarGradError> {
        check_arity(inputs, self.fan_in(), "Neuron")?;
        let mut acc = self.bias.id();
        for (w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w.id(), x)?;
            acc = graph.add(acc, wx)?;
        }
        self.activation.apply(graph, acc)
    }
}

impl<T: ScalarNumeric> Module<T> for Neuron {
    fn forward(&self, graph: &mut Graph<T>, inputs: &[NodeId]) -> Result<Vec<NodeId>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn num_inputs(&self) -> usize {
        self.fan_in()
    }

    fn num_outputs(&self) -> usize {
        1
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w))
            .collect();
        params.push(("b".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
