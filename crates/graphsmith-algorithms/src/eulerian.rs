//! Eulerian circuit detection
//!
//! A graph has an Eulerian circuit when it is connected and every node is
//! balanced: even degree for undirected graphs, equal in- and out-degree for
//! directed ones. Connectivity is checked over all nodes, so an isolated node
//! makes the graph non-Eulerian. The empty graph is not Eulerian.

use super::common::{GraphView, NodeId};
use super::community::{strongly_connected_components, weakly_connected_components};

/// Nodes that violate the degree condition for an Eulerian circuit.
pub fn unbalanced_nodes(view: &GraphView) -> Vec<NodeId> {
    (0..view.node_count)
        .filter(|&idx| {
            if view.directed {
                view.in_degree(idx) != view.out_degree(idx)
            } else {
                view.out_degree(idx) % 2 != 0
            }
        })
        .map(|idx| view.index_to_node[idx])
        .collect()
}

/// Returns true if the graph contains an Eulerian circuit.
pub fn has_eulerian_circuit(view: &GraphView) -> bool {
    if view.node_count == 0 {
        return false;
    }

    if !unbalanced_nodes(view).is_empty() {
        return false;
    }

    let component_count = if view.directed {
        strongly_connected_components(view).components.len()
    } else {
        weakly_connected_components(view).components.len()
    };

    component_count == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<(usize, usize, f64)> {
        vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]
    }

    #[test]
    fn test_undirected_cycle_is_eulerian() {
        let view = GraphView::from_edges(false, 4, &square(), false);
        assert!(has_eulerian_circuit(&view));
    }

    #[test]
    fn test_undirected_path_is_not_eulerian() {
        let mut edges = square();
        edges.pop();
        let view = GraphView::from_edges(false, 4, &edges, false);

        assert!(!has_eulerian_circuit(&view));
        assert_eq!(unbalanced_nodes(&view), vec![0, 3]);
    }

    #[test]
    fn test_directed_cycle_is_eulerian() {
        let view = GraphView::from_edges(true, 4, &square(), false);
        assert!(has_eulerian_circuit(&view));
    }

    #[test]
    fn test_directed_balanced_but_disconnected() {
        // Two separate 2-cycles: balanced, not strongly connected
        let view = GraphView::from_edges(
            true,
            4,
            &[(0, 1, 1.0), (1, 0, 1.0), (2, 3, 1.0), (3, 2, 1.0)],
            false,
        );

        assert!(unbalanced_nodes(&view).is_empty());
        assert!(!has_eulerian_circuit(&view));
    }

    #[test]
    fn test_isolated_node_breaks_connectivity() {
        let view = GraphView::from_edges(false, 5, &square(), false);
        assert!(!has_eulerian_circuit(&view));
    }

    #[test]
    fn test_empty_graph() {
        let view = GraphView::from_edges(false, 0, &[], false);
        assert!(!has_eulerian_circuit(&view));
    }

    #[test]
    fn test_single_self_loop() {
        let view = GraphView::from_edges(false, 1, &[(0, 0, 1.0)], false);
        assert!(has_eulerian_circuit(&view));
    }
}
