// src/graph/op_methods.rs
//
// Method sugar over the `_op` functions of `crate::ops`.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, scalar_mul_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::reduction::{mean_op, sum_op};
use crate::ops::traits::ScalarNumeric;

impl<T: ScalarNumeric> Graph<T> {
    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        neg_op(self, a)
    }

    /// `a * k` for a constant `k`.
    pub fn scalar_mul(&mut self, a: NodeId, k: T) -> Result<NodeId, ScalarGradError> {
        scalar_mul_op(self, a, k)
    }

    /// `a ^ k` for a constant exponent `k`.
    pub fn pow(&mut self, a: NodeId, k: T) -> Result<NodeId, ScalarGradError> {
        pow_op(self, a, k)
    }

    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }

    pub fn tanh(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        tanh_op(self, a)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        exp_op(self, a)
    }

    /// Sum of `ids`, folded with `add` from a zero leaf.
    pub fn sum(&mut self, ids: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        sum_op(self, ids)
    }

    /// Mean of `ids`; fails with `EmptyInput` when `ids` is empty.
    pub fn mean(&mut self, ids: &[NodeId]) -> Result<NodeId, ScalarGradError> {
        mean_op(self, ids)
    }
}
