//! # scalargrad-core
//!
//! A reverse-mode automatic-differentiation engine over scalar values.
//!
//! Expressions are recorded into a [`Graph`] arena one primitive at a time;
//! [`Graph::backward`] then propagates exact gradients from an output back to
//! every node it depends on. The [`nn`], [`model`] and [`optim`] modules build
//! small feed-forward networks and their training step on top of it.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let mut graph = Graph::<f64>::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.mul(a, b)?;
//! let y = graph.tanh(c)?;
//! graph.backward(y)?;
//! assert!(graph.grad(a)? < 0.0);
//! # Ok::<(), scalargrad_core::ScalarGradError>(())
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::{check_grad, GradCheckError, Op};
pub use error::ScalarGradError;
pub use graph::{Graph, Mark};
pub use node::{Node, NodeId, Operands};
pub use ops::traits::ScalarNumeric;
// Re-export traits required by public functions/structs
pub use num_traits;
