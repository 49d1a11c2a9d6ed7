use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::ScalarNumeric;
use std::collections::HashMap;

/// Traversal state of a node during one topological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    /// On the DFS stack; its operands are still being explored.
    Queued,
    /// Appended to the order.
    Finalized,
}

struct Frame {
    id: NodeId,
    next_operand: usize,
}

/// Builds the post-order of the subgraph reachable from `root`.
///
/// Iterative depth-first search, so the depth of the expression is not bound
/// by the call stack. The visit map lives for this call only: nothing is left
/// behind on the nodes, and sorting the same graph twice gives the same order.
/// Meeting a `Queued` node again means the graph has a cycle, which the arena
/// cannot build; it is still reported rather than looping.
pub(crate) fn topological_sort<T: ScalarNumeric>(
    graph: &Graph<T>,
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.slot(root)?;

    let mut state: HashMap<NodeId, VisitState> = HashMap::new();
    let mut order = Vec::new();
    let mut stack = vec![Frame {
        id: root,
        next_operand: 0,
    }];
    state.insert(root, VisitState::Queued);

    while let Some(frame) = stack.last_mut() {
        let operands = graph.operands(frame.id)?;
        match operands.as_slice().get(frame.next_operand) {
            Some(&child) => {
                frame.next_operand += 1;
                match state.get(&child).copied().unwrap_or(VisitState::Unvisited) {
                    VisitState::Unvisited => {
                        graph.slot(child)?;
                        state.insert(child, VisitState::Queued);
                        stack.push(Frame {
                            id: child,
                            next_operand: 0,
                        });
                    }
                    VisitState::Queued => return Err(ScalarGradError::CycleDetected),
                    VisitState::Finalized => {}
                }
            }
            None => {
                let id = frame.id;
                stack.pop();
                state.insert(id, VisitState::Finalized);
                order.push(id);
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
