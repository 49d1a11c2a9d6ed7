use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layers::linear::Linear;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn layer(graph: &mut Graph<f64>) -> Result<Linear, ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(11);
    Linear::new(graph, 3, 4, Activation::Tanh, &Init::default(), &mut rng)
}

#[test]
fn test_linear_shapes_and_parameter_count() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let linear = layer(&mut graph)?;
    assert_eq!(linear.in_features(), 3);
    assert_eq!(linear.out_features(), 4);
    assert_eq!(Module::<f64>::parameters(&linear).len(), 16);
    assert_eq!(Module::<f64>::children(&linear).len(), 4);

    let xs: Vec<_> = [2.0, 3.0, -1.0].iter().map(|&v| graph.leaf(v)).collect();
    let outs = linear.forward(&mut graph, &xs)?;
    assert_eq!(outs.len(), 4);
    for out in outs {
        assert!(graph.value(out)?.abs() < 1.0);
    }
    Ok(())
}

#[test]
fn test_linear_each_output_is_its_neuron() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = Neuron::from_values(&mut graph, &[1.0, 0.0], 0.0, Activation::Linear);
    let b = Neuron::from_values(&mut graph, &[0.0, 2.0], 1.0, Activation::Linear);
    let linear = Linear::from_neurons(vec![a, b])?;

    let x = graph.leaf(3.0);
    let y = graph.leaf(5.0);
    let outs = linear.forward(&mut graph, &[x, y])?;
    assert_eq!(graph.values(&outs)?, vec![3.0, 11.0]);
    Ok(())
}

#[test]
fn test_linear_rejects_mixed_fan_in() {
    let mut graph = Graph::<f64>::new();
    let a = Neuron::from_values(&mut graph, &[1.0, 0.0], 0.0, Activation::Linear);
    let b = Neuron::from_values(&mut graph, &[1.0], 0.0, Activation::Linear);
    assert!(matches!(
        Linear::from_neurons(vec![a, b]),
        Err(ScalarGradError::InputArityMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn test_linear_arity_mismatch() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let linear = layer(&mut graph)?;
    let x = graph.leaf(1.0);
    assert!(matches!(
        linear.forward(&mut graph, &[x, x]),
        Err(ScalarGradError::InputArityMismatch { expected: 3, actual: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_linear_named_parameters() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let linear = layer(&mut graph)?;
    let named = Module::<f64>::named_parameters(&linear);
    assert_eq!(named[0].0, "neuron0.w0");
    assert_eq!(named[3].0, "neuron0.b");
    assert_eq!(named[15].0, "neuron3.b");
    Ok(())
}

#[test]
fn test_linear_zero_grad() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let linear = layer(&mut graph)?;
    let xs: Vec<_> = [1.0, 1.0, 1.0].iter().map(|&v| graph.leaf(v)).collect();
    let outs = linear.forward(&mut graph, &xs)?;
    let total = graph.sum(&outs)?;
    graph.backward(total)?;
    assert!(Module::<f64>::parameter_ids(&linear).iter().any(|&id| graph.grad(id).map_or(false, |g| g != 0.0)));

    linear.zero_grad(&mut graph)?;
    for id in Module::<f64>::parameter_ids(&linear) {
        assert_eq!(graph.grad(id)?, 0.0);
    }
    Ok(())
}
