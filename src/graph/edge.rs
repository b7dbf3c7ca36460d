//! Edge implementation
//!
//! In undirected graphs `(u, v)` and `(v, u)` are the same edge; the store
//! lists it with the earlier-inserted vertex as `source`.

use super::types::VertexLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An edge between two existing vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex when directed)
    pub source: VertexLabel,

    /// Target vertex
    pub target: VertexLabel,

    /// Weight, only ever present on weighted graphs
    pub weight: Option<f64>,
}

impl Edge {
    pub fn new(source: impl Into<VertexLabel>, target: impl Into<VertexLabel>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "({}, {}, {})", self.source, self.target, w),
            None => write!(f, "({}, {})", self.source, self.target),
        }
    }
}
