//! Command processor
//!
//! Turns raw text (batch files, freeform batch items, interactive menu input)
//! into store mutations and queries.

pub mod batch;
pub mod console;
pub mod manual;
pub mod menu;
pub mod session;

pub use batch::{ingest_file, ingest_str, parse_line, BatchCommand, BatchReport};
pub use console::Console;
pub use manual::{insert_items, parse_edge_specs, parse_vertex_line};
pub use menu::MenuOption;
pub use session::{prompt_batch_file, prompt_mode, Session, SessionError, SessionResult, SessionState};

use crate::graph::{EdgeUpdate, GraphError, GraphResult, GraphStore};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning input text into graph operations.
///
/// None of these abort a session; callers report them and move on.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown command '{command}' in line: {line}")]
    UnknownCommand { command: String, line: String },

    #[error("Invalid edge line '{0}'. Usage: e <vertex1> <vertex2> [weight]")]
    MalformedEdge(String),

    #[error("Invalid edge: '{0}'")]
    InvalidEdgeSpec(String),

    #[error("Invalid weight '{0}'")]
    InvalidWeight(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A parsed edge request
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Option<f64>) -> Self {
        EdgeSpec {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn apply(&self, store: &mut GraphStore) -> GraphResult<EdgeUpdate> {
        store.add_edge(&self.source, &self.target, self.weight)
    }
}

/// Parse a weight token. Only finite numbers are accepted.
pub fn parse_weight(token: &str) -> Result<f64, IngestError> {
    match token.trim().parse::<f64>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(IngestError::InvalidWeight(token.trim().to_string())),
    }
}
