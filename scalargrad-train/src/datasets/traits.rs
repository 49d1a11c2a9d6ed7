use scalargrad_core::ScalarGradError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a single value,
/// a `(features, target)` sample, or any other custom type that implements
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
