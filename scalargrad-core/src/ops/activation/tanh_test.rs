use crate::autograd::check_grad;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_tanh_value_and_grad() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(0.5);
    let out = graph.tanh(a)?;
    graph.backward(out)?;

    let t = 0.5f64.tanh();
    assert_relative_eq!(graph.value(out)?, t, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(a)?, 1.0 - t * t, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_tanh_saturates_without_nan() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(800.0);
    let out = graph.tanh(a)?;
    graph.backward(out)?;
    assert_eq!(graph.value(out)?, 1.0);
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_tanh_matches_finite_differences() {
    let result = check_grad(|g: &mut Graph<f64>, x| g.tanh(x[0]), &[-0.3], 1e-6, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}
