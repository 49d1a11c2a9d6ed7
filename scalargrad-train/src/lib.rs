//! # scalargrad-train
//!
//! Training driver for `scalargrad-core` models: in-memory datasets, index
//! samplers, an environment-overridable [`TrainConfig`] and the full-batch
//! [`Trainer`] loop.

pub mod config;
pub mod datasets;
pub mod error;
pub mod samplers;
pub mod trainer;

pub use config::TrainConfig;
pub use datasets::{Dataset, Sample, VecDataset};
pub use error::{ConfigError, TrainError};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use trainer::{predict, TrainReport, Trainer};
