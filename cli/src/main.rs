//! Graphsmith CLI: interactive graph builder on stdin/stdout
//!
//! Diagnostics go to stderr through `tracing`; the menu owns stdout.

use anyhow::Context;
use clap::Parser;
use graphsmith::command::{prompt_batch_file, prompt_mode};
use graphsmith::{Console, DotRenderer, GraphStore, Session, SessionConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphsmith", version, about = "Interactive graph builder and inspector")]
struct Cli {
    /// YAML session configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Whether the graph is directed (asked at startup when omitted)
    #[arg(long)]
    directed: Option<bool>,

    /// Whether edges carry weights (asked at startup when omitted)
    #[arg(long)]
    weighted: Option<bool>,

    /// Batch file to ingest before the menu starts
    #[arg(long)]
    file: Option<PathBuf>,

    /// Where to write the rendered graph (Graphviz DOT)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Log filter for stderr diagnostics, e.g. `info` or `graphsmith=debug`
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> SessionConfig {
        SessionConfig {
            directed: self.directed,
            weighted: self.weighted,
            batch_file: self.file.clone(),
            plot_path: self.plot.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => SessionConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let config = file_config.merge(cli.overrides());

    init_tracing(config.log_level.as_deref());
    info!("Graphsmith v{} starting", graphsmith::version());

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    let batch_file = prompt_batch_file(&mut console, &config)?;

    console.say("\nWelcome to the Graph Builder!")?;
    let mode = prompt_mode(&mut console, &config)?;

    let renderer = DotRenderer::new(config.plot_path());
    info!("Plots are written to {}", renderer.path().display());
    let mut session = Session::new(GraphStore::new(mode), console, Box::new(renderer));

    if let Some(path) = batch_file {
        session.ingest_file(&path)?;
    }

    session.run()?;
    Ok(())
}
