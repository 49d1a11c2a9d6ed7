use crate::error::ScalarGradError;
use crate::graph::Graph;

#[test]
fn test_sum_value_and_grads() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let ids: Vec<_> = [1.0, -2.0, 3.5].iter().map(|&v| graph.leaf(v)).collect();
    let total = graph.sum(&ids)?;
    assert_eq!(graph.value(total)?, 2.5);

    graph.backward(total)?;
    for id in ids {
        assert_eq!(graph.grad(id)?, 1.0);
    }
    Ok(())
}

#[test]
fn test_sum_of_nothing_is_zero_leaf() -> Result<(), ScalarGradError> {
    let mut graph: Graph<f64> = Graph::new();
    let total = graph.sum(&[])?;
    assert_eq!(graph.value(total)?, 0.0);
    assert!(graph.node(total)?.is_leaf());
    Ok(())
}

#[test]
fn test_sum_repeated_term() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(2.0);
    let total = graph.sum(&[x, x, x])?;
    graph.backward(total)?;
    assert_eq!(graph.value(total)?, 6.0);
    assert_eq!(graph.grad(x)?, 3.0);
    Ok(())
}
