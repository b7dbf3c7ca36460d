//! # Dot
//!
//! Writes the graph in the Dot-Format used by [GraphViz](https://graphviz.org/).
//! Only basic functionality is used: labelled nodes, and edges with a `label`
//! carrying the weight when one is stored.
//!
//! ```text
//! graph G {
//!   "a";
//!   "b";
//!   "a" -- "b" [label="2.5"];
//! }
//! ```

use super::{RenderResult, Renderer};
use crate::graph::GraphStore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// A renderer writing Dot to a fixed path
#[derive(Debug, Clone)]
pub struct DotRenderer {
    path: PathBuf,
}

impl DotRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the Dot document for `store` into `writer`
    pub fn write_graph<W: Write>(store: &GraphStore, writer: &mut W) -> std::io::Result<()> {
        let (keyword, connector) = if store.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{} G {{", keyword)?;
        for vertex in store.vertices() {
            writeln!(writer, "  {};", quote(vertex.as_str()))?;
        }
        for edge in store.edges() {
            write!(
                writer,
                "  {} {} {}",
                quote(edge.source.as_str()),
                connector,
                quote(edge.target.as_str())
            )?;
            match edge.weight {
                Some(w) => writeln!(writer, " [label=\"{}\"];", w)?,
                None => writeln!(writer, ";")?,
            }
        }
        writeln!(writer, "}}")
    }
}

impl Renderer for DotRenderer {
    fn render(&mut self, store: &GraphStore) -> RenderResult<PathBuf> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        Self::write_graph(store, &mut writer)?;
        writer.flush()?;

        info!("Rendered {} vertices and {} edges to {:?}", store.order(), store.size(), self.path);
        Ok(self.path.clone())
    }
}

/// Quote an identifier, escaping backslashes and double quotes
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
