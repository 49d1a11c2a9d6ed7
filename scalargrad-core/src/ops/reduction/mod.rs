// src/ops/reduction/mod.rs
// Reductions over several nodes, composed from the primitives.

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
