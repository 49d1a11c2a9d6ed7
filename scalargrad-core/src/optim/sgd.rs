use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. For each parameter
/// `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// b = momentum * b + d            (b = d on the first step)
/// u = d + momentum * b if nesterov, b if momentum > 0, d otherwise
/// p = p - lr * u
/// ```
///
/// With no momentum and no decay this is the plain update `p += -lr * g`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer<T: ScalarNumeric> {
    params: Vec<NodeId>,
    lr: T,
    momentum: T,
    weight_decay: T,
    nesterov: bool,
    momentum_buffers: HashMap<NodeId, T>,
    steps: usize,
}

impl<T: ScalarNumeric> SgdOptimizer<T> {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: Ids of the parameter leaves to optimize.
    /// * `lr`: The learning rate, finite and non-negative.
    /// * `momentum`: Momentum factor, finite and non-negative (0 disables it).
    /// * `weight_decay`: L2 penalty factor, finite and non-negative.
    /// * `nesterov`: Enables Nesterov momentum; requires `momentum > 0`.
    pub fn new(
        params: impl IntoIterator<Item = NodeId>,
        lr: T,
        momentum: T,
        weight_decay: T,
        nesterov: bool,
    ) -> Result<Self, ScalarGradError> {
        check_non_negative("lr", lr)?;
        check_non_negative("momentum", momentum)?;
        check_non_negative("weight_decay", weight_decay)?;
        if nesterov && momentum <= T::zero() {
            return Err(invalid(
                "momentum",
                momentum,
                "Nesterov momentum requires a momentum greater than zero",
            ));
        }
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum,
            weight_decay,
            nesterov,
            momentum_buffers: HashMap::new(),
            steps: 0,
        })
    }

    /// Plain SGD: no momentum, no weight decay.
    pub fn plain(params: impl IntoIterator<Item = NodeId>, lr: T) -> Result<Self, ScalarGradError> {
        Self::new(params, lr, T::zero(), T::zero(), false)
    }

    pub fn momentum(&self) -> T {
        self.momentum
    }

    pub fn weight_decay(&self) -> T {
        self.weight_decay
    }

    pub fn nesterov(&self) -> bool {
        self.nesterov
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<T: ScalarNumeric> Optimizer<T> for SgdOptimizer<T> {
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), ScalarGradError> {
        for &id in &self.params {
            let value = graph.value(id)?;
            let mut d_p = graph.grad(id)?;

            if self.weight_decay != T::zero() {
                d_p += self.weight_decay * value;
            }

            let update = if self.momentum != T::zero() {
                let momentum = self.momentum;
                let buffer = self
                    .momentum_buffers
                    .entry(id)
                    .and_modify(|b| *b = momentum * *b + d_p)
                    .or_insert(d_p);
                if self.nesterov {
                    d_p + momentum * *buffer
                } else {
                    *buffer
                }
            } else {
                d_p
            };

            graph.set_leaf_value(id, value - self.lr * update)?;
        }
        self.steps += 1;
        debug!(
            "SGD step {}: updated {} parameters (lr {})",
            self.steps,
            self.params.len(),
            self.lr
        );
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> T {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: T) -> Result<(), ScalarGradError> {
        check_non_negative("lr", lr)?;
        self.lr = lr;
        Ok(())
    }
}

fn check_non_negative<T: ScalarNumeric>(name: &str, value: T) -> Result<(), ScalarGradError> {
    if !value.is_finite() || value < T::zero() {
        return Err(invalid(name, value, "must be finite and non-negative"));
    }
    Ok(())
}

fn invalid<T: ScalarNumeric>(name: &str, value: T, reason: &str) -> ScalarGradError {
    ScalarGradError::InvalidHyperparameter {
        name: name.to_string(),
        value: value.to_f64().unwrap_or(f64::NAN),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
