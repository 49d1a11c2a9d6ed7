// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;

/// Specifies the reduction applied over the per-sample squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// `Σ (ŷ - y)²`, the classic training loss of the demo.
    #[default]
    Sum,
    Mean,
}

/// Squared-error loss between prediction nodes and constant targets.
///
/// Each target becomes a fresh leaf and each term is recorded as
/// `pow(ŷ - y, 2)`; the terms are folded with `add` from a zero leaf.
pub fn mse_loss<T: ScalarNumeric>(
    graph: &mut Graph<T>,
    predictions: &[NodeId],
    targets: &[T],
    reduction: Reduction,
) -> Result<NodeId, ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::LengthMismatch {
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mse_loss".to_string(),
        });
    }

    let two = T::one() + T::one();
    let mut terms = Vec::with_capacity(predictions.len());
    for (&pred, &target) in predictions.iter().zip(targets) {
        let y = graph.leaf(target);
        let diff = graph.sub(pred, y)?;
        terms.push(graph.pow(diff, two)?);
    }
    match reduction {
        Reduction::Sum => graph.sum(&terms),
        Reduction::Mean => graph.mean(&terms),
    }
}

/// [`mse_loss`] with its reduction fixed up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn forward<T: ScalarNumeric>(
        &self,
        graph: &mut Graph<T>,
        predictions: &[NodeId],
        targets: &[T],
    ) -> Result<NodeId, ScalarGradError> {
        mse_loss(graph, predictions, targets, self.reduction)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
