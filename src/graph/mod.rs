//! Core graph store
//!
//! This module implements the labeled graph model:
//! - Unique string-labeled vertices kept in insertion order
//! - Directed or undirected edges with an optional numeric weight
//! - At most one edge per ordered (directed) or unordered (undirected) pair

pub mod edge;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use store::{EdgeUpdate, GraphError, GraphResult, GraphStore};
pub use types::{Degree, GraphMode, VertexLabel};
