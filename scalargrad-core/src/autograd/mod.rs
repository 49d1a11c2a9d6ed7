//! # Autograd
//!
//! The reverse-mode engine: the [`Op`] tag of each node selects its local
//! gradient rule ([`backward_op`]), [`graph`] linearises the subgraph reachable
//! from an output, and [`Graph::backward`](crate::graph::Graph::backward) walks
//! that order in reverse. [`grad_check`] validates the rules against finite
//! differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
