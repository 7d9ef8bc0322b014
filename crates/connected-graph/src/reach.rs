use tracing::trace;

use crate::graph::{Graph, GraphError, NodeId};

/// Whether `target` can be reached from `source` along outgoing edges.
///
/// A node reaches itself. Traversal is depth-first in edge order, visits each
/// node at most once (so cycles terminate), and stops at the first hit.
///
/// # Errors
///
/// [`GraphError::UnknownNode`] if either id does not belong to `graph`.
pub fn reachable(graph: &Graph, source: NodeId, target: NodeId) -> Result<bool, GraphError> {
    graph.check(source)?;
    graph.check(target)?;

    let mut visited = vec![false; graph.len()];
    let mut stack = vec![source];

    while let Some(id) = stack.pop() {
        if visited[id.index()] {
            trace!(node = ?graph.value(id), "already visited, discarded");
            continue;
        }
        visited[id.index()] = true;

        if id == target {
            trace!(node = ?graph.value(id), "reached target");
            return Ok(true);
        }

        let edges = graph.neighbors(id);
        trace!(node = ?graph.value(id), children = edges.len(), "visiting");
        // Reverse so the first edge is explored first.
        stack.extend(edges.iter().rev().copied());
    }

    Ok(false)
}
