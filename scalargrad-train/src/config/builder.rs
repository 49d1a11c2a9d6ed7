//! Build [`TrainConfig`] from environment variables.
//!
//! Key names live in [`crate::config::constants`]; every lookup goes through
//! [`env_parsed`] so a set but malformed variable is reported with its key.

use super::constants::{
    ENV_EPOCHS, ENV_LEARNING_RATE, ENV_LOG_EVERY, ENV_MOMENTUM, ENV_NESTEROV, ENV_PREFIX, ENV_SEED,
    ENV_SHUFFLE, ENV_TARGET_LOSS, ENV_WEIGHT_DECAY,
};
use super::TrainConfig;
use crate::error::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `SCALARGRAD_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads `key` from the process environment.
///
/// `Ok(None)` if unset, `Err(ConfigError::EnvVar)` if set but not valid Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Looks `key` up with `lookup` and parses it into `T`.
///
/// Returns `Ok(None)` if unset and `Err(ConfigError::Parse)` if set but
/// unparsable (e.g. `SCALARGRAD_EPOCHS=abc`).
pub fn env_parsed<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let s = match lookup(key)? {
        Some(s) => s,
        None => return Ok(None),
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`TrainConfig`] from the process environment, falling back to
/// [`TrainConfig::default`] for unset values.
pub fn from_env() -> Result<TrainConfig, ConfigError> {
    from_lookup(env_string)
}

/// Same as [`from_env`] with a custom variable source.
pub fn from_lookup<F>(lookup: F) -> Result<TrainConfig, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let default = TrainConfig::default();

    let epochs = env_parsed::<usize, _>(&lookup, &env_key(ENV_EPOCHS))?.unwrap_or(default.epochs);
    let learning_rate =
        env_parsed::<f64, _>(&lookup, &env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let momentum = env_parsed::<f64, _>(&lookup, &env_key(ENV_MOMENTUM))?.unwrap_or(default.momentum);
    let weight_decay =
        env_parsed::<f64, _>(&lookup, &env_key(ENV_WEIGHT_DECAY))?.unwrap_or(default.weight_decay);
    let nesterov = env_parsed::<bool, _>(&lookup, &env_key(ENV_NESTEROV))?.unwrap_or(default.nesterov);
    let log_every = env_parsed::<usize, _>(&lookup, &env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);
    let shuffle = env_parsed::<bool, _>(&lookup, &env_key(ENV_SHUFFLE))?.unwrap_or(default.shuffle);
    let seed = env_parsed::<u64, _>(&lookup, &env_key(ENV_SEED))?.unwrap_or(default.seed);
    let target_loss = env_parsed::<f64, _>(&lookup, &env_key(ENV_TARGET_LOSS))?.or(default.target_loss);

    Ok(TrainConfig {
        epochs,
        learning_rate,
        momentum,
        weight_decay,
        nesterov,
        log_every,
        shuffle,
        seed,
        target_loss,
    })
}
