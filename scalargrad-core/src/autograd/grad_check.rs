use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::{cast, ScalarNumeric};
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression from the input leaves it is handed. It is
/// called once on a fresh graph to get the analytical gradients of every
/// input, then twice per input with that input shifted by `±epsilon`. A
/// gradient passes when the absolute or the relative difference is within
/// `tolerance`.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = to_f64(graph.grad(leaf)?)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        // --- 2. Central difference for this input ---
        let loss_plus = evaluate(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "grad check input {}: analytical {} numerical {} (diff {})",
            input_index, analytical_grad, numerical_grad, difference
        );
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn evaluate<T, F>(func: &F, inputs: &[T], shifted: usize, delta: f64) -> Result<f64, GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::with_capacity(inputs.len());
    let mut leaves = Vec::with_capacity(inputs.len());
    for (i, &v) in inputs.iter().enumerate() {
        let v = if i == shifted { v + cast::<T>(delta)? } else { v };
        leaves.push(graph.leaf(v));
    }
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(to_f64(graph.value(output)?)?)
}

fn to_f64<T: ScalarNumeric>(value: T) -> Result<f64, ScalarGradError> {
    value.to_f64().ok_or_else(|| {
        ScalarGradError::InternalError(format!("{} is not representable as f64", value))
    })
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
