use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;

/// Checks that the nodes `ids` hold `expected` values, within `tolerance`.
/// Panics with the first offending index otherwise.
pub fn check_values_near<T: ScalarNumeric>(graph: &Graph<T>, ids: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (&id, &e)) in ids.iter().zip(expected).enumerate() {
        let actual = graph
            .value(id)
            .unwrap_or_else(|err| panic!("Failed to read value of {}: {}", id, err));
        check_near(i, "value", actual, e, tolerance);
    }
}

/// Same as [`check_values_near`], for accumulated gradients.
pub fn check_grads_near<T: ScalarNumeric>(graph: &Graph<T>, ids: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (&id, &e)) in ids.iter().zip(expected).enumerate() {
        let actual = graph
            .grad(id)
            .unwrap_or_else(|err| panic!("Failed to read grad of {}: {}", id, err));
        check_near(i, "grad", actual, e, tolerance);
    }
}

fn check_near<T: ScalarNumeric>(index: usize, what: &str, actual: T, expected: T, tolerance: T) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            what, index, actual, expected, diff, tolerance
        );
    }
}
