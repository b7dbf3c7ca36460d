//! Batch ingestion
//!
//! One command per line, whitespace-delimited, command token case-insensitive:
//!
//! ```text
//! v a b c        add vertices
//! e a b          add an edge
//! e a b 2.5      add a weighted edge (weighted graphs only)
//! ```
//!
//! A weight is honoured only when the line has exactly four tokens. Blank
//! lines are skipped; bad lines are reported and do not stop ingestion.

use super::{parse_weight, EdgeSpec, IngestError};
use crate::graph::{EdgeUpdate, GraphStore};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// A single parsed batch line
#[derive(Debug, Clone, PartialEq)]
pub enum BatchCommand {
    Vertices(Vec<String>),
    Edge(EdgeSpec),
}

/// Summary of one ingestion run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub vertices_added: usize,
    pub edges_added: usize,
    pub edges_updated: usize,
    /// (1-based line number, problem) for everything skipped or ignored
    pub notices: Vec<(usize, IngestError)>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    pub(crate) fn record_edge(&mut self, update: EdgeUpdate) {
        match update {
            EdgeUpdate::Added => self.edges_added += 1,
            EdgeUpdate::Updated => self.edges_updated += 1,
        }
    }
}

/// Parse one batch line. Returns `Ok(None)` for blank lines.
///
/// `weighted` decides whether a trailing weight token is honoured.
pub fn parse_line(line: &str, weighted: bool) -> Result<Option<BatchCommand>, IngestError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    match first.to_lowercase().as_str() {
        "v" => Ok(Some(BatchCommand::Vertices(
            tokens[1..].iter().map(|t| t.to_string()).collect(),
        ))),
        "e" => {
            if tokens.len() < 3 {
                return Err(IngestError::MalformedEdge(line.trim().to_string()));
            }
            let weight = if tokens.len() == 4 && weighted {
                Some(parse_weight(tokens[3])?)
            } else {
                None
            };
            Ok(Some(BatchCommand::Edge(EdgeSpec::new(tokens[1], tokens[2], weight))))
        }
        command => Err(IngestError::UnknownCommand {
            command: command.to_string(),
            line: line.trim().to_string(),
        }),
    }
}

/// Apply batch text to the store, line by line.
pub fn ingest_str(store: &mut GraphStore, text: &str) -> BatchReport {
    let weighted = store.is_weighted();
    let mut report = BatchReport::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let command = match parse_line(line, weighted) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!("Skipping batch line {}: {}", line_no, e);
                report.notices.push((line_no, e));
                continue;
            }
        };

        match command {
            BatchCommand::Vertices(labels) => {
                for label in labels {
                    match store.add_vertex(&label) {
                        Ok(()) => report.vertices_added += 1,
                        Err(e) => report.notices.push((line_no, e.into())),
                    }
                }
            }
            BatchCommand::Edge(spec) => match spec.apply(store) {
                Ok(update) => report.record_edge(update),
                Err(e) => report.notices.push((line_no, e.into())),
            },
        }
    }

    info!(
        "Batch ingested: {} vertices, {} edges added, {} edges updated, {} notices",
        report.vertices_added,
        report.edges_added,
        report.edges_updated,
        report.notices.len()
    );
    report
}

/// Read a batch file and apply it to the store.
///
/// A missing file is `IngestError::FileNotFound`; the store is untouched.
pub fn ingest_file(store: &mut GraphStore, path: impl AsRef<Path>) -> Result<BatchReport, IngestError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound(path.to_path_buf()),
        _ => IngestError::Io(e),
    })?;

    info!("Ingesting batch file {:?}", path);
    Ok(ingest_str(store, &text))
}
