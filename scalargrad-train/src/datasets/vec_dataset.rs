use super::traits::Dataset;
use scalargrad_core::ScalarGradError;

/// One supervised example: input features and the scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    pub features: Vec<T>,
    pub target: T,
}

/// A simple dataset that wraps a `Vec` of items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Copy + Send + 'static> VecDataset<Sample<T>> {
    /// Pairs each row of `features` with the target at the same position.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::LengthMismatch` if there are not as many
    /// targets as rows.
    pub fn from_rows(features: Vec<Vec<T>>, targets: Vec<T>) -> Result<Self, ScalarGradError> {
        if features.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                predictions: features.len(),
                targets: targets.len(),
            });
        }
        let data = features
            .into_iter()
            .zip(targets)
            .map(|(features, target)| Sample { features, target })
            .collect();
        Ok(Self { data })
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Clones the item before returning.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
