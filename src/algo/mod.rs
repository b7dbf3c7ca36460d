//! Graph algorithms module
//!
//! Algorithms are implemented in the `graphsmith-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::{GraphError, GraphResult, GraphStore, VertexLabel};
use graphsmith_algorithms::{GraphView, NodeId as AlgoNodeId, PathResult};
use std::fmt;
use tracing::debug;

// Re-export algorithms
pub use graphsmith_algorithms::{
    bfs, dijkstra, has_eulerian_circuit, strongly_connected_components, unbalanced_nodes,
    weakly_connected_components, SccResult, WccResult,
};

/// A shortest path expressed in vertex labels
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<VertexLabel>,
    /// Total weight on weighted graphs, number of edges otherwise
    pub cost: f64,
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hops: Vec<&str> = self.path.iter().map(|l| l.as_str()).collect();
        write!(f, "{}", hops.join(" -> "))
    }
}

/// Build a GraphView from the store for algorithm execution
///
/// Vertex indices become node ids. Edges without a stored weight count as
/// 1.0 when the graph is weighted.
pub fn build_view(store: &GraphStore) -> GraphView {
    let node_count = store.order();
    let directed = store.is_directed();

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Option<Vec<Vec<f64>>> = if store.is_weighted() {
        Some(vec![Vec::new(); node_count])
    } else {
        None
    };

    for (u, v, weight) in store.edge_entries() {
        let w = weight.unwrap_or(1.0);

        outgoing[u].push(v);
        incoming[v].push(u);
        if let Some(ref mut w_vec) = weights {
            w_vec[u].push(w);
        }

        if !directed {
            outgoing[v].push(u);
            incoming[u].push(v);
            if let Some(ref mut w_vec) = weights {
                w_vec[v].push(w);
            }
        }
    }

    GraphView::from_adjacency_list(
        directed,
        (0..node_count as AlgoNodeId).collect(),
        outgoing,
        incoming,
        weights,
    )
}

/// Shortest path between two vertices.
///
/// Weighted graphs use Dijkstra (non-negative weights), unweighted graphs BFS.
pub fn shortest_path(store: &GraphStore, from: &str, to: &str) -> GraphResult<ShortestPath> {
    let source = store
        .index_of(from)
        .ok_or_else(|| GraphError::VertexNotFound(from.to_string()))?;
    let target = store
        .index_of(to)
        .ok_or_else(|| GraphError::VertexNotFound(to.to_string()))?;

    let view = build_view(store);
    let result = if store.is_weighted() {
        dijkstra(&view, source as AlgoNodeId, target as AlgoNodeId)
    } else {
        bfs(&view, source as AlgoNodeId, target as AlgoNodeId)
    };

    let no_path = || GraphError::NoPath {
        from: from.to_string(),
        to: to.to_string(),
    };
    let PathResult { path, cost, .. } = result.ok_or_else(no_path)?;

    let path = path
        .into_iter()
        .map(|id| store.label_at(id as usize).cloned().ok_or_else(no_path))
        .collect::<GraphResult<Vec<_>>>()?;

    debug!("Shortest path '{}' -> '{}': {} hops, cost {}", from, to, path.len() - 1, cost);
    Ok(ShortestPath { path, cost })
}

/// Whether the graph admits an Eulerian circuit
pub fn is_eulerian(store: &GraphStore) -> bool {
    let view = build_view(store);
    let eulerian = has_eulerian_circuit(&view);
    debug!(
        "Eulerian check: {} ({} unbalanced vertices)",
        eulerian,
        unbalanced_nodes(&view).len()
    );
    eulerian
}
