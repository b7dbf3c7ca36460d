//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex label (e.g., "a", "Lisbon")
///
/// Labels are the only identity a vertex has; they are unique within a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexLabel(String);

impl VertexLabel {
    pub fn new(label: impl Into<String>) -> Self {
        VertexLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexLabel {
    fn from(s: String) -> Self {
        VertexLabel(s)
    }
}

impl From<&str> for VertexLabel {
    fn from(s: &str) -> Self {
        VertexLabel(s.to_string())
    }
}

impl std::borrow::Borrow<str> for VertexLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Session-wide mode of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphMode {
    /// Edges are one-way
    pub directed: bool,
    /// Edges may carry a numeric weight
    pub weighted: bool,
}

impl GraphMode {
    pub fn new(directed: bool, weighted: bool) -> Self {
        GraphMode { directed, weighted }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.directed { "directed" } else { "undirected" };
        let weights = if self.weighted { "weighted" } else { "unweighted" };
        write!(f, "{}, {}", direction, weights)
    }
}

/// Degree of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// Total degree; a self-loop counts twice
    Undirected(usize),
    Directed { in_degree: usize, out_degree: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_label() {
        let label = VertexLabel::new("a");
        assert_eq!(label.as_str(), "a");
        assert_eq!(format!("{}", label), "a");

        let label2: VertexLabel = "b".into();
        assert!(label < label2);
    }

    #[test]
    fn test_graph_mode_display() {
        assert_eq!(GraphMode::new(true, false).to_string(), "directed, unweighted");
        assert_eq!(GraphMode::default().to_string(), "undirected, unweighted");
    }
}
