use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::parameter::Parameter;

#[test]
fn test_parameter_create_named_labels_leaf() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::create(&mut graph, 0.25, Some("b".to_string()));
    assert_eq!(param.name(), Some("b"));
    assert_eq!(param.value(&graph)?, 0.25);
    assert_eq!(param.grad(&graph)?, 0.0);
    assert_eq!(graph.label(param.id())?, Some("b"));
    assert!(graph.node(param.id())?.is_leaf());
    Ok(())
}

#[test]
fn test_parameter_grad_follows_backward() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::create(&mut graph, 3.0, None);
    let y = graph.pow(param.id(), 2.0)?;
    graph.backward(y)?;
    assert_eq!(param.grad(&graph)?, 6.0);
    Ok(())
}

#[test]
fn test_parameter_debug() {
    let mut graph: Graph<f64> = Graph::new();
    let id = graph.leaf(1.0);
    assert_eq!(format!("{:?}", Parameter::new_unnamed(id)), "Parameter(#0)");
    assert_eq!(
        format!("{:?}", Parameter::new(id, Some("w0".to_string()))),
        "Parameter(w0, #0)"
    );
}
