use crate::error::ScalarGradError;
use crate::ops::traits::{cast, ScalarNumeric};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Policy used to draw the initial value of a parameter.
///
/// Sampling goes through a caller-supplied RNG, so seeding it makes a whole
/// network reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

impl Default for Init {
    /// Uniform over `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the policy's parameters without sampling.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() {
                    return Err(invalid("low", low, "must be finite"));
                }
                if !high.is_finite() {
                    return Err(invalid("high", high, "must be finite"));
                }
                if low >= high {
                    return Err(invalid("high", high, "must be greater than low"));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() {
                    return Err(invalid("mean", mean, "must be finite"));
                }
                if !std.is_finite() || std < 0.0 {
                    return Err(invalid("std", std, "must be finite and non-negative"));
                }
            }
            Init::Constant(v) => {
                if !v.is_finite() {
                    return Err(invalid("constant", v, "must be finite"));
                }
            }
        }
        Ok(())
    }

    /// Draws one value.
    pub fn sample<T: ScalarNumeric, R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T, ScalarGradError> {
        self.validate()?;
        let value = match *self {
            Init::Uniform { low, high } => Uniform::new(low, high).sample(rng),
            Init::Normal { mean, std } => Normal::new(mean, std)
                .map_err(|e| invalid("std", std, &e.to_string()))?
                .sample(rng),
            Init::Constant(v) => v,
        };
        cast(value)
    }

    /// Draws `n` values.
    pub fn sample_n<T: ScalarNumeric, R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<T>, ScalarGradError> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

fn invalid(name: &str, value: f64, reason: &str) -> ScalarGradError {
    ScalarGradError::InvalidHyperparameter {
        name: name.to_string(),
        value,
        reason: reason.to_string(),
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
