//! In-memory graph storage implementation
//!
//! One store type covers all four modes; adjacency and degree queries branch
//! on `GraphMode::directed`.

use super::edge::Edge;
use super::types::{Degree, GraphMode, VertexLabel};
use crate::algo::{self, ShortestPath};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    VertexNotFound(String),

    VertexAlreadyExists(String),

    InvalidEdgeSource(String),

    InvalidEdgeTarget(String),

    NegativeWeight { source: String, target: String, weight: f64 },

    NoPath { from: String, to: String },
}

// Written by hand: thiserror would treat the `source` field as the error cause.
impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::VertexNotFound(v) => write!(f, "Vertex '{v}' not found"),
            GraphError::VertexAlreadyExists(v) => write!(f, "Vertex '{v}' already exists"),
            GraphError::InvalidEdgeSource(v) => {
                write!(f, "Invalid edge: source vertex '{v}' does not exist")
            }
            GraphError::InvalidEdgeTarget(v) => {
                write!(f, "Invalid edge: target vertex '{v}' does not exist")
            }
            GraphError::NegativeWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "Invalid weight {weight} for edge '{source}' - '{target}': weights must not be negative"
            ),
            GraphError::NoPath { from, to } => write!(f, "No path between '{from}' and '{to}'"),
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

/// Outcome of a successful `add_edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    /// A new edge was stored
    Added,
    /// The edge already existed; its attributes were updated
    Updated,
}

/// In-memory graph storage
///
/// - vertices: insertion-ordered label set; a label's position is its index
/// - outgoing: index -> successor indices (both directions when undirected)
/// - incoming: index -> predecessor indices (directed only)
/// - edges: (source, target) -> weight, keyed by (min, max) when undirected
#[derive(Debug, Clone)]
pub struct GraphStore {
    mode: GraphMode,

    vertices: IndexSet<VertexLabel>,

    outgoing: Vec<IndexSet<usize>>,

    incoming: Vec<IndexSet<usize>>,

    edges: IndexMap<(usize, usize), Option<f64>>,
}

impl GraphStore {
    /// Create a new empty graph store with a fixed mode
    pub fn new(mode: GraphMode) -> Self {
        GraphStore {
            mode,
            vertices: IndexSet::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.mode.weighted
    }

    /// Insert a vertex. Duplicates leave the store untouched and are reported
    /// as `VertexAlreadyExists`.
    pub fn add_vertex(&mut self, label: &str) -> GraphResult<()> {
        if self.vertices.contains(label) {
            return Err(GraphError::VertexAlreadyExists(label.to_string()));
        }

        self.vertices.insert(VertexLabel::new(label));
        self.outgoing.push(IndexSet::new());
        self.incoming.push(IndexSet::new());
        debug!("Added vertex '{}'", label);
        Ok(())
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains(label)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &VertexLabel> + '_ {
        self.vertices.iter()
    }

    /// Insert an edge between two existing vertices.
    ///
    /// The weight is stored only on weighted graphs, where it must not be
    /// negative. Re-adding an existing edge with a weight replaces the weight;
    /// without one it keeps it.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: Option<f64>) -> GraphResult<EdgeUpdate> {
        let u = self
            .index_of(source)
            .ok_or_else(|| GraphError::InvalidEdgeSource(source.to_string()))?;
        let v = self
            .index_of(target)
            .ok_or_else(|| GraphError::InvalidEdgeTarget(target.to_string()))?;

        let weight = if self.mode.weighted { weight } else { None };
        if let Some(w) = weight.filter(|w| *w < 0.0) {
            return Err(GraphError::NegativeWeight {
                source: source.to_string(),
                target: target.to_string(),
                weight: w,
            });
        }
        let key = self.edge_key(u, v);

        if let Some(existing) = self.edges.get_mut(&key) {
            if weight.is_some() {
                *existing = weight;
            }
            debug!("Updated edge '{}' - '{}' (weight {:?})", source, target, existing);
            return Ok(EdgeUpdate::Updated);
        }

        self.edges.insert(key, weight);
        self.outgoing[u].insert(v);
        if self.mode.directed {
            self.incoming[v].insert(u);
        } else {
            self.outgoing[v].insert(u);
        }

        debug!("Added edge '{}' - '{}' (weight {:?})", source, target, weight);
        Ok(EdgeUpdate::Added)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(move |(&(u, v), &weight)| Edge {
            source: self.vertices[u].clone(),
            target: self.vertices[v].clone(),
            weight,
        })
    }

    /// Weight of the edge between two vertices, if the edge exists and has one
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        let u = self.index_of(source)?;
        let v = self.index_of(target)?;
        self.edges.get(&self.edge_key(u, v)).copied().flatten()
    }

    /// Edge existence test; symmetric on undirected graphs
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index_of(source), self.index_of(target)) {
            (Some(u), Some(v)) => self.edges.contains_key(&self.edge_key(u, v)),
            _ => false,
        }
    }

    /// Neighbors of a vertex. On directed graphs this is the successor set.
    pub fn neighbors(&self, label: &str) -> GraphResult<Vec<&VertexLabel>> {
        self.successors(label)
    }

    pub fn successors(&self, label: &str) -> GraphResult<Vec<&VertexLabel>> {
        let idx = self.require(label)?;
        Ok(self.labels(&self.outgoing[idx]))
    }

    pub fn predecessors(&self, label: &str) -> GraphResult<Vec<&VertexLabel>> {
        let idx = self.require(label)?;
        if self.mode.directed {
            Ok(self.labels(&self.incoming[idx]))
        } else {
            Ok(self.labels(&self.outgoing[idx]))
        }
    }

    pub fn degree(&self, label: &str) -> GraphResult<Degree> {
        let idx = self.require(label)?;
        if self.mode.directed {
            Ok(Degree::Directed {
                in_degree: self.incoming[idx].len(),
                out_degree: self.outgoing[idx].len(),
            })
        } else {
            // The self-loop sits in the neighbor set once but counts twice
            let self_loop = usize::from(self.outgoing[idx].contains(&idx));
            Ok(Degree::Undirected(self.outgoing[idx].len() + self_loop))
        }
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shortest path by total weight on weighted graphs, by edge count otherwise
    pub fn shortest_path(&self, from: &str, to: &str) -> GraphResult<ShortestPath> {
        algo::shortest_path(self, from, to)
    }

    /// Whether the graph admits an Eulerian circuit
    pub fn is_eulerian(&self) -> bool {
        algo::is_eulerian(self)
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    pub(crate) fn label_at(&self, idx: usize) -> Option<&VertexLabel> {
        self.vertices.get_index(idx)
    }

    /// Stored edges as index pairs with their weights
    pub(crate) fn edge_entries(&self) -> impl Iterator<Item = (usize, usize, Option<f64>)> + '_ {
        self.edges.iter().map(|(&(u, v), &w)| (u, v, w))
    }

    fn require(&self, label: &str) -> GraphResult<usize> {
        self.index_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    fn edge_key(&self, u: usize, v: usize) -> (usize, usize) {
        if self.mode.directed || u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }

    fn labels(&self, indices: &IndexSet<usize>) -> Vec<&VertexLabel> {
        indices.iter().map(|&i| &self.vertices[i]).collect()
    }
}
