pub mod traits;
pub mod vec_dataset;

pub use traits::Dataset;
pub use vec_dataset::{Sample, VecDataset};
