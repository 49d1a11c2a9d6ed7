use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Errors produced when building or validating a [`TrainConfig`](crate::TrainConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Values are out of range or inconsistent (e.g. Nesterov without momentum).
    #[error("config validation: {0}")]
    Validation(String),

    /// An environment variable could not be read (e.g. invalid Unicode).
    #[error("env var {key}: {message}")]
    EnvVar { key: String, message: String },

    /// An environment variable was set but could not be parsed into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        key: String,
        value: String,
        message: String,
    },
}

/// Error type of the training driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("graph error: {0}")]
    Grad(#[from] ScalarGradError),

    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error("loss became {loss} at epoch {epoch}")]
    NonFiniteLoss { epoch: usize, loss: f64 },
}
