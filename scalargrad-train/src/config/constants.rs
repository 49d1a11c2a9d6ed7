//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `SCALARGRAD_EPOCHS`).
pub(crate) const ENV_PREFIX: &str = "SCALARGRAD_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_EPOCHS: &str = "EPOCHS";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_MOMENTUM: &str = "MOMENTUM";
pub(crate) const ENV_WEIGHT_DECAY: &str = "WEIGHT_DECAY";
pub(crate) const ENV_NESTEROV: &str = "NESTEROV";
pub(crate) const ENV_LOG_EVERY: &str = "LOG_EVERY";
pub(crate) const ENV_SHUFFLE: &str = "SHUFFLE";
pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_TARGET_LOSS: &str = "TARGET_LOSS";

// --- Default values ---

pub(crate) const DEFAULT_EPOCHS: usize = 9999;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub(crate) const DEFAULT_MOMENTUM: f64 = 0.0;
pub(crate) const DEFAULT_WEIGHT_DECAY: f64 = 0.0;
pub(crate) const DEFAULT_NESTEROV: bool = false;
pub(crate) const DEFAULT_LOG_EVERY: usize = 100;
pub(crate) const DEFAULT_SHUFFLE: bool = false;
pub(crate) const DEFAULT_SEED: u64 = 42;
