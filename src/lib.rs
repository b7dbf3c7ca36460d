//! Graphsmith
//!
//! An interactive graph builder and inspector. A graph is created once per
//! session as directed or undirected, weighted or unweighted, then built up
//! through menu commands or batch files and queried for order/size,
//! adjacency, degree, shortest paths and Eulerian circuits.
//!
//! # Architecture
//!
//! - `graph`: the in-memory graph store (labeled vertices, optional weights)
//! - `algo`: adapter onto the `graphsmith-algorithms` crate (BFS, Dijkstra,
//!   connectivity, Eulerian test)
//! - `command`: batch parser, freeform batch items and the menu session
//! - `render`: render collaborator (Graphviz DOT output)
//! - `config`: optional YAML session configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use graphsmith::command::ingest_str;
//! use graphsmith::graph::{GraphMode, GraphStore};
//!
//! let mut store = GraphStore::new(GraphMode::new(false, true));
//! let report = ingest_str(&mut store, "v a b c\ne a b 1\ne b c 5\ne a c 3\n");
//! assert!(report.is_clean());
//!
//! let path = store.shortest_path("a", "c").unwrap();
//! assert_eq!(path.to_string(), "a -> c");
//! assert_eq!(path.cost, 3.0);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod command;
pub mod config;
pub mod graph;
pub mod render;

// Re-export main types for convenience
pub use graph::{Degree, Edge, EdgeUpdate, GraphError, GraphMode, GraphResult, GraphStore, VertexLabel};

pub use algo::ShortestPath;

pub use command::{
    BatchReport, Console, IngestError, MenuOption, Session, SessionError, SessionResult, SessionState,
};

pub use config::{ConfigError, SessionConfig};

pub use render::{DotRenderer, RenderError, Renderer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
