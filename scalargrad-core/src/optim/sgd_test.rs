use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::sgd::SgdOptimizer;
use approx::assert_relative_eq;

// Leaves with the given values, and a loss whose gradient w.r.t. each is `grads[i]`.
fn setup(values: &[f64], grads: &[f64]) -> Result<(Graph<f64>, Vec<NodeId>, NodeId), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let params: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
    let mut terms = Vec::new();
    for (&p, &g) in params.iter().zip(grads) {
        terms.push(graph.scalar_mul(p, g)?);
    }
    let loss = graph.sum(&terms)?;
    Ok((graph, params, loss))
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let values = [1.0, 2.0, 3.0, 4.0];
    let grads = [0.1, 0.2, 0.3, 0.4];
    let (mut graph, params, loss) = setup(&values, &grads)?;
    graph.backward(loss)?;

    let mut optimizer = SgdOptimizer::plain(params.clone(), 0.1)?;
    optimizer.step(&mut graph)?;

    for (i, &p) in params.iter().enumerate() {
        assert_eq!(graph.value(p)?, values[i] + -0.1 * grads[i]);
    }
    assert_eq!(optimizer.steps(), 1);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let (mut graph, params, loss) = setup(&[2.0], &[0.5])?;
    graph.backward(loss)?;

    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.01, false)?;
    optimizer.step(&mut graph)?;
    // 2 - 0.1 * (0.5 + 0.02)
    assert_relative_eq!(graph.value(params[0])?, 1.948, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum_two_steps() -> Result<(), ScalarGradError> {
    let (mut graph, params, loss) = setup(&[1.0], &[1.0])?;
    graph.backward(loss)?;

    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.9, 0.0, false)?;
    optimizer.step(&mut graph)?;
    // b = 1
    assert_relative_eq!(graph.value(params[0])?, 0.9, epsilon = 1e-12);
    optimizer.step(&mut graph)?;
    // b = 0.9 + 1 = 1.9
    assert_relative_eq!(graph.value(params[0])?, 0.71, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_nesterov() -> Result<(), ScalarGradError> {
    let (mut graph, params, loss) = setup(&[1.0], &[1.0])?;
    graph.backward(loss)?;

    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.9, 0.0, true)?;
    optimizer.step(&mut graph)?;
    // u = 1 + 0.9 * 1
    assert_relative_eq!(graph.value(params[0])?, 0.81, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_zero_grad_and_lr() -> Result<(), ScalarGradError> {
    let (mut graph, params, loss) = setup(&[1.0, 1.0], &[3.0, 4.0])?;
    graph.backward(loss)?;

    let mut optimizer = SgdOptimizer::plain(params.clone(), 0.5)?;
    optimizer.zero_grad(&mut graph)?;
    for &p in &params {
        assert_eq!(graph.grad(p)?, 0.0);
    }
    // Zero gradients leave the parameters in place.
    optimizer.step(&mut graph)?;
    assert_eq!(graph.values(&params)?, vec![1.0, 1.0]);

    optimizer.set_learning_rate(0.01)?;
    assert_eq!(optimizer.learning_rate(), 0.01);
    assert!(optimizer.set_learning_rate(-1.0).is_err());
    assert_eq!(optimizer.learning_rate(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_rejects_non_leaf() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let p = graph.leaf(1.0);
    let derived = graph.neg(p)?;
    let mut optimizer = SgdOptimizer::plain(vec![derived], 0.1)?;
    assert!(matches!(
        optimizer.step(&mut graph),
        Err(ScalarGradError::NotALeaf { .. })
    ));
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    let params: Vec<NodeId> = Vec::new();
    assert!(matches!(
        SgdOptimizer::new(params.clone(), -0.1, 0.0, 0.0, false),
        Err(ScalarGradError::InvalidHyperparameter { ref name, .. }) if name == "lr"
    ));
    assert!(SgdOptimizer::new(params.clone(), f64::NAN, 0.0, 0.0, false).is_err());
    assert!(SgdOptimizer::new(params.clone(), 0.1, -0.5, 0.0, false).is_err());
    assert!(SgdOptimizer::new(params.clone(), 0.1, 0.0, -1.0, false).is_err());
    assert!(matches!(
        SgdOptimizer::new(params, 0.1, 0.0, 0.0, true),
        Err(ScalarGradError::InvalidHyperparameter { ref name, .. }) if name == "momentum"
    ));
}
