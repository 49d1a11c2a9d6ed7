use scalargrad_core::{Graph, NodeId, ScalarGradError};

// Shared fixtures for the integration tests.
// allow(dead_code) because each test crate only uses some of them.

/// Creates one leaf per value.
#[allow(dead_code)]
pub fn leaves(graph: &mut Graph<f64>, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// The four-sample dataset of the demo network.
#[allow(dead_code)]
pub fn reference_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// `tanh(x0*w0 + x1*w1 + b)` with the classic micrograd numbers.
#[allow(dead_code)]
pub fn neuron_expression(graph: &mut Graph<f64>) -> Result<(Vec<NodeId>, NodeId), ScalarGradError> {
    let x1 = graph.leaf_labeled(2.0, "x1");
    let x2 = graph.leaf_labeled(0.0, "x2");
    let w1 = graph.leaf_labeled(-3.0, "w1");
    let w2 = graph.leaf_labeled(1.0, "w2");
    let b = graph.leaf_labeled(6.881_373_587_019_543, "b");
    let x1w1 = graph.mul(x1, w1)?;
    let x2w2 = graph.mul(x2, w2)?;
    let s = graph.add(x1w1, x2w2)?;
    let n = graph.add(s, b)?;
    let o = graph.tanh(n)?;
    Ok((vec![x1, x2, w1, w2, b], o))
}

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
