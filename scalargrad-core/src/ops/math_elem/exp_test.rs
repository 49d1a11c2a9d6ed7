use crate::error::ScalarGradError;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_exp_value_and_grad() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    let out = graph.exp(a)?;
    graph.backward(out)?;
    assert_relative_eq!(graph.value(out)?, std::f64::consts::E, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(a)?, std::f64::consts::E, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_exp_overflow_is_infinite() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1000.0);
    let out = graph.exp(a)?;
    assert!(graph.value(out)?.is_infinite());
    Ok(())
}

#[test]
fn test_exp_chain_with_scalar_mul() -> Result<(), ScalarGradError> {
    // y = exp(2a), dy/da = 2 exp(2a)
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(0.3);
    let two_a = graph.scalar_mul(a, 2.0)?;
    let y = graph.exp(two_a)?;
    graph.backward(y)?;
    assert_relative_eq!(graph.grad(a)?, 2.0 * 0.6f64.exp(), epsilon = 1e-12);
    Ok(())
}
