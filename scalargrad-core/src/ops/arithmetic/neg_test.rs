use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;

#[test]
fn test_neg_value_and_grad() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.5);
    let out = graph.neg(a)?;
    assert_eq!(graph.value(out)?, -2.5);
    assert_eq!(graph.op(out)?, Op::Neg);

    graph.backward(out)?;
    assert_eq!(graph.grad(a)?, -1.0);
    Ok(())
}

#[test]
fn test_neg_inside_expression() -> Result<(), ScalarGradError> {
    // y = a * (-b)
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(2.0);
    let nb = graph.neg(b)?;
    let y = graph.mul(a, nb)?;
    graph.backward(y)?;
    assert_eq!(graph.value(y)?, -6.0);
    assert_eq!(graph.grad(a)?, -2.0);
    assert_eq!(graph.grad(b)?, -3.0);
    Ok(())
}
