use crate::config::TrainConfig;
use crate::datasets::{Dataset, Sample};
use crate::error::TrainError;
use crate::samplers::{RandomSampler, Sampler, SequentialSampler};
use log::{debug, info, warn};
use scalargrad_core::nn::{mse_loss, Module, Reduction};
use scalargrad_core::num_traits::NumCast;
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{Graph, NodeId, ScalarGradError, ScalarNumeric};

/// Outcome of [`Trainer::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport<T> {
    /// Loss of every epoch, computed before that epoch's update.
    pub losses: Vec<T>,
    /// Predictions of the last epoch, in dataset order.
    pub predictions: Vec<T>,
    /// Less than the configured epochs when the target loss was reached.
    pub epochs_run: usize,
}

impl<T: Copy> TrainReport<T> {
    pub fn initial_loss(&self) -> Option<T> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<T> {
        self.losses.last().copied()
    }
}

/// Full-batch training loop.
///
/// Each epoch records a fresh expression on top of the model's parameters:
/// the graph is rewound to the mark taken when `fit` starts, every sample is
/// forwarded, the squared errors are summed, and the optimizer steps on the
/// resulting gradients.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    /// Validates `config` and wraps it.
    pub fn new(config: TrainConfig) -> Result<Self, TrainError> {
        config.validate()?;
        Ok(Trainer { config })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains `model` with SGD built from the config's hyper-parameters.
    pub fn fit<T, M, D>(
        &self,
        graph: &mut Graph<T>,
        model: &M,
        dataset: &D,
    ) -> Result<TrainReport<T>, TrainError>
    where
        T: ScalarNumeric,
        M: Module<T> + ?Sized,
        D: Dataset<Item = Sample<T>>,
    {
        let mut optimizer = SgdOptimizer::new(
            model.parameter_ids(),
            to_scalar(self.config.learning_rate)?,
            to_scalar(self.config.momentum)?,
            to_scalar(self.config.weight_decay)?,
            self.config.nesterov,
        )?;
        self.fit_with(graph, model, dataset, &mut optimizer)
    }

    /// Same as [`Trainer::fit`] with a caller-supplied optimizer.
    ///
    /// The model's parameters must already be in `graph`, and no node the
    /// caller still needs may be created after them: the graph is rewound
    /// to its current length before every epoch.
    pub fn fit_with<T, M, D, O>(
        &self,
        graph: &mut Graph<T>,
        model: &M,
        dataset: &D,
        optimizer: &mut O,
    ) -> Result<TrainReport<T>, TrainError>
    where
        T: ScalarNumeric,
        M: Module<T> + ?Sized,
        D: Dataset<Item = Sample<T>>,
        O: Optimizer<T> + ?Sized,
    {
        if dataset.is_empty() {
            return Err(TrainError::EmptyDataset);
        }
        let mut sampler: Box<dyn Sampler> = if self.config.shuffle {
            Box::new(RandomSampler::new(self.config.seed))
        } else {
            Box::new(SequentialSampler::new())
        };

        let mark = graph.mark();
        let mut losses = Vec::with_capacity(self.config.epochs);
        let mut predictions = Vec::new();
        let mut epochs_run = 0;
        info!(
            "Training {} parameters on {} samples for up to {} epochs",
            model.parameters().len(),
            dataset.len(),
            self.config.epochs
        );

        for epoch in 1..=self.config.epochs {
            graph.rewind(mark)?;

            let order: Vec<usize> = sampler.iter(dataset.len()).collect();
            let mut preds = Vec::with_capacity(order.len());
            let mut targets = Vec::with_capacity(order.len());
            for &index in &order {
                let sample = dataset.get(index)?;
                preds.push(predict(graph, model, &sample.features)?);
                targets.push(sample.target);
            }
            let loss = mse_loss(graph, &preds, &targets, Reduction::Sum)?;
            let loss_value = graph.value(loss)?;
            if !loss_value.is_finite() {
                let loss = loss_value.to_f64().unwrap_or(f64::NAN);
                warn!("Loss is {} at epoch {}, aborting", loss, epoch);
                return Err(TrainError::NonFiniteLoss { epoch, loss });
            }

            optimizer.zero_grad(graph)?;
            graph.backward(loss)?;
            optimizer.step(graph)?;

            losses.push(loss_value);
            predictions = vec![T::zero(); dataset.len()];
            for (&index, &pred) in order.iter().zip(&preds) {
                predictions[index] = graph.value(pred)?;
            }
            epochs_run = epoch;

            if self.config.log_every > 0 && (epoch == 1 || epoch % self.config.log_every == 0) {
                info!("epoch {} loss {:.6}", epoch, loss_value);
            } else {
                debug!("epoch {} loss {:.6}", epoch, loss_value);
            }

            if let Some(target) = self.config.target_loss {
                if loss_value.to_f64().map_or(false, |l| l < target) {
                    info!("Target loss {} reached at epoch {}", target, epoch);
                    break;
                }
            }
        }

        Ok(TrainReport {
            losses,
            predictions,
            epochs_run,
        })
    }
}

/// Creates one leaf per feature, runs `model` and returns its first output.
pub fn predict<T, M>(graph: &mut Graph<T>, model: &M, features: &[T]) -> Result<NodeId, ScalarGradError>
where
    T: ScalarNumeric,
    M: Module<T> + ?Sized,
{
    let inputs: Vec<NodeId> = features.iter().map(|&v| graph.leaf(v)).collect();
    model
        .forward(graph, &inputs)?
        .first()
        .copied()
        .ok_or_else(|| ScalarGradError::EmptyInput {
            operation: "predict".to_string(),
        })
}

fn to_scalar<T: ScalarNumeric>(value: f64) -> Result<T, ScalarGradError> {
    <T as NumCast>::from(value).ok_or(ScalarGradError::NumericCast { value })
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
