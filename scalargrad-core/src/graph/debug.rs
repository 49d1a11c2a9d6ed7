// src/graph/debug.rs
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use std::fmt::Write;

const INDENT: &str = "   ";

impl<T: ScalarNumeric> Graph<T> {
    /// One-line summary of a node: `( data=…, grad=…, op=… )`.
    pub fn describe(&self, id: NodeId) -> Result<String, ScalarGradError> {
        let node = self.node(id)?;
        Ok(format!(
            "( data={:.6}, grad={:.6}, op={} )",
            node.value, node.grad, node.op
        ))
    }

    /// Indented dump of `root` and, recursively, its operands.
    ///
    /// Each line reads `label | op | value | grad`. The ancestry is printed as
    /// a tree, so an operand shared by several consumers is printed once per
    /// path. Debugging aid only: nothing is mutated.
    pub fn dump(&self, root: NodeId) -> Result<String, ScalarGradError> {
        let mut out = String::new();
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id)?;
            let pad = INDENT.repeat(depth);
            writeln!(
                out,
                "{pad}{} | {} | {:.4} | {:.4}",
                node.label().unwrap_or("_"),
                node.op,
                node.value,
                node.grad
            )
            .map_err(|e| ScalarGradError::InternalError(e.to_string()))?;
            for &operand in node.operands().iter().rev() {
                stack.push((operand, depth + 1));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "debug_test.rs"]
mod tests;
