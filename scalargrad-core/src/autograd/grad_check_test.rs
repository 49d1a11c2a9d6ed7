use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-5;

fn neuron(graph: &mut Graph<f64>, x: &[NodeId]) -> Result<NodeId, ScalarGradError> {
    // tanh(x0*x1 + x2*x3 + b)
    let a = graph.mul(x[0], x[1])?;
    let c = graph.mul(x[2], x[3])?;
    let s = graph.add(a, c)?;
    let s = graph.add(s, x[4])?;
    graph.tanh(s)
}

#[test]
fn test_check_grad_neuron_passes() {
    let inputs = [2.0, -3.0, 0.0, 1.0, 6.881_373_587_019_543];
    assert_eq!(check_grad(neuron, &inputs, EPS, TOL), Ok(()));
}

#[test]
fn test_check_grad_composite_passes() {
    let f = |graph: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, ScalarGradError> {
        let q = graph.div(x[0], x[1])?;
        let p = graph.pow(q, 3.0)?;
        let e = graph.exp(x[1])?;
        let n = graph.neg(e)?;
        graph.sub(p, n)
    };
    assert_eq!(check_grad(f, &[1.5, 0.7], EPS, TOL), Ok(()));
}

#[test]
fn test_check_grad_detects_mismatch_at_relu_kink() {
    // Central difference sees slope 0.5 at 0, the rule uses 0.
    let f = |graph: &mut Graph<f64>, x: &[NodeId]| graph.relu(x[0]);
    match check_grad(f, &[0.0], EPS, TOL) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 0.0);
            approx::assert_relative_eq!(numerical_grad, 0.5, epsilon = 1e-6);
        }
        other => panic!("expected a mismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_reports_infinite_analytical_grad() {
    let f = |graph: &mut Graph<f64>, x: &[NodeId]| -> Result<NodeId, ScalarGradError> {
        let one = graph.leaf(1.0);
        graph.div(one, x[0])
    };
    assert!(matches!(
        check_grad(f, &[0.0], EPS, TOL),
        Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_forwards_func_error() {
    let f = |graph: &mut Graph<f64>, _x: &[NodeId]| graph.mean(&[]);
    assert!(matches!(
        check_grad(f, &[1.0], EPS, TOL),
        Err(GradCheckError::ForwardPassError(ScalarGradError::EmptyInput { .. }))
    ));
}
