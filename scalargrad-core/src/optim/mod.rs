// scalargrad-core/src/optim/mod.rs

//! Optimizers updating parameter leaves from their accumulated gradients.
//!
//! An optimizer only ever touches leaves, through
//! [`Graph::set_leaf_value`](crate::graph::Graph::set_leaf_value), so nodes
//! derived from the old values must be rewound away before the next forward
//! pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
