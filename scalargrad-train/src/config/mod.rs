//! Training configuration.
//!
//! Load from environment via [`from_env`] and validate with [`TrainConfig::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;

pub use builder::{env_key, env_parsed, env_string, from_env, from_lookup};

use crate::error::ConfigError;
use constants::{
    DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, DEFAULT_LOG_EVERY, DEFAULT_MOMENTUM, DEFAULT_NESTEROV,
    DEFAULT_SEED, DEFAULT_SHUFFLE, DEFAULT_WEIGHT_DECAY,
};

/// Hyper-parameters of [`Trainer::fit`](crate::Trainer::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of full passes over the dataset.
    pub epochs: usize,
    pub learning_rate: f64,
    pub momentum: f64,
    pub weight_decay: f64,
    pub nesterov: bool,
    /// Log the loss every `log_every` epochs; 0 disables progress logs.
    pub log_every: usize,
    /// Visit samples in a seeded random order instead of dataset order.
    pub shuffle: bool,
    pub seed: u64,
    /// Stop as soon as the epoch loss drops below this value.
    pub target_loss: Option<f64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
            weight_decay: DEFAULT_WEIGHT_DECAY,
            nesterov: DEFAULT_NESTEROV,
            log_every: DEFAULT_LOG_EVERY,
            shuffle: DEFAULT_SHUFFLE,
            seed: DEFAULT_SEED,
            target_loss: None,
        }
    }
}

impl TrainConfig {
    /// Checks ranges and combinations of the hyper-parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epochs == 0 {
            return Err(ConfigError::Validation("epochs must be > 0".to_string()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if !self.momentum.is_finite() || self.momentum < 0.0 {
            return Err(ConfigError::Validation(format!(
                "momentum must be finite and >= 0, got {}",
                self.momentum
            )));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(ConfigError::Validation(format!(
                "weight_decay must be finite and >= 0, got {}",
                self.weight_decay
            )));
        }
        if self.nesterov && self.momentum == 0.0 {
            return Err(ConfigError::Validation(
                "nesterov requires momentum > 0".to_string(),
            ));
        }
        if let Some(target) = self.target_loss {
            if !target.is_finite() || target < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "target_loss must be finite and >= 0, got {}",
                    target
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
