// scalargrad-train/src/samplers/traits.rs

use std::fmt::Debug;

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// The trainer draws one pass of indices per epoch; samples are fed to the
/// model in that order. Every pass visits each index exactly once.
pub trait Sampler: Debug + Send {
    /// Returns an iterator over the indices of a dataset.
    ///
    /// Takes `&mut self` so seeded samplers can advance their generator from
    /// one epoch to the next.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;
}
