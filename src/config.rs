//! Session configuration loaded from an optional YAML file.
//!
//! Every field is optional; command-line flags override file values, and
//! graph modes still unset after merging are asked for on the console.
//!
//! # Example Configuration
//!
//! ```yaml
//! directed: true
//! weighted: false
//! batch_file: roads.txt
//! plot_path: out/roads.dot
//! log_level: debug
//! ```

use crate::graph::GraphMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the rendered graph
pub const DEFAULT_PLOT_PATH: &str = "graph.dot";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Whether edges are one-way
    pub directed: Option<bool>,

    /// Whether edges carry weights
    pub weighted: Option<bool>,

    /// Batch file ingested before the menu starts
    pub batch_file: Option<PathBuf>,

    /// Where the graph is rendered (default: `graph.dot`)
    pub plot_path: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `graphsmith=debug`
    pub log_level: Option<String>,
}

impl SessionConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Fields set in `overrides` win over fields set in `self`
    pub fn merge(self, overrides: SessionConfig) -> Self {
        SessionConfig {
            directed: overrides.directed.or(self.directed),
            weighted: overrides.weighted.or(self.weighted),
            batch_file: overrides.batch_file.or(self.batch_file),
            plot_path: overrides.plot_path.or(self.plot_path),
            log_level: overrides.log_level.or(self.log_level),
        }
    }

    /// The graph mode, if both flags are known
    pub fn mode(&self) -> Option<GraphMode> {
        Some(GraphMode::new(self.directed?, self.weighted?))
    }

    pub fn plot_path(&self) -> PathBuf {
        self.plot_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLOT_PATH))
    }
}
