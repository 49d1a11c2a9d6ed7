//! # Primitive operations (`ops`)
//!
//! Each differentiable primitive lives in its own file with two halves:
//!
//! - **`xxx_op`**: the forward function. It reads its operands' values,
//!   computes the output eagerly and records a node tagged with the matching
//!   [`Op`](crate::autograd::Op). These are also exposed as methods on
//!   [`Graph`](crate::graph::Graph).
//! - **`xxx_backward`**: the local gradient rule, called by the dispatch in
//!   [`autograd::backward_op`](crate::autograd::backward_op). It adds the
//!   contribution of the node's gradient into its operands' gradients.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, scalar multiplication, power.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp.
//! - [`reduction`]: sum and mean over several nodes (composed from `add`).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;
pub mod traits;
