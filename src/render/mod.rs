//! Render collaborator
//!
//! The session hands the whole graph to a `Renderer` when the user asks to
//! display it. Drawing pixels is left to external viewers; the bundled
//! renderer writes Graphviz DOT.

pub mod dot;

pub use dot::DotRenderer;

use crate::graph::GraphStore;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

pub trait Renderer {
    /// Render the graph and return where the output went.
    fn render(&mut self, store: &GraphStore) -> RenderResult<PathBuf>;
}
