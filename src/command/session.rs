//! Interactive menu session
//!
//! The session owns the graph store for its whole lifetime and runs a
//! single prompt/dispatch loop until the user picks "Exit" or input ends.
//! User mistakes are printed and the loop continues; only console I/O
//! failures surface as errors.

use super::batch::{ingest_file, BatchReport};
use super::console::Console;
use super::manual::insert_items;
use super::menu::MenuOption;
use super::{parse_weight, IngestError};
use crate::config::SessionConfig;
use crate::graph::{Degree, GraphError, GraphMode, GraphStore};
use crate::render::Renderer;
use comfy_table::{ContentArrangement, Table};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

pub struct Session<R, W> {
    store: GraphStore,
    console: Console<R, W>,
    renderer: Box<dyn Renderer>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: GraphStore, console: Console<R, W>, renderer: Box<dyn Renderer>) -> Self {
        Session {
            store,
            console,
            renderer,
            state: SessionState::Running,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_parts(self) -> (GraphStore, Console<R, W>) {
        (self.store, self.console)
    }

    /// Run the menu loop until the session terminates
    pub fn run(&mut self) -> SessionResult<()> {
        info!("Session started ({})", self.store.mode());
        while self.state == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu, read one selection and handle it
    pub fn step(&mut self) -> SessionResult<SessionState> {
        self.console.say(format!("\n{}", MenuOption::listing().trim_end()))?;

        let Some(token) = self.ask("\nChoose an option: ")? else {
            return Ok(self.state);
        };

        match MenuOption::from_token(&token) {
            Some(option) => self.dispatch(option)?,
            None => {
                debug!("Invalid menu selection {:?}", token);
                self.console.say("Invalid option! Please choose a valid option.")?;
            }
        }
        Ok(self.state)
    }

    pub fn dispatch(&mut self, option: MenuOption) -> SessionResult<()> {
        debug!("Dispatching {:?}", option);
        match option {
            MenuOption::AddVertex => self.add_vertex(),
            MenuOption::AddEdge => self.add_edge(),
            MenuOption::BatchFromFile => self.batch_from_file(),
            MenuOption::BatchManual => self.batch_manual(),
            MenuOption::Display => self.display(),
            MenuOption::OrderAndSize => self.order_and_size(),
            MenuOption::Adjacency => self.adjacency(),
            MenuOption::Degree => self.degree(),
            MenuOption::AdjacencyTest => self.adjacency_test(),
            MenuOption::ShortestPath => self.shortest_path(),
            MenuOption::Eulerian => self.eulerian(),
            MenuOption::Exit => {
                self.console.say("Shutting down...")?;
                self.terminate();
                Ok(())
            }
        }
    }

    /// Ingest a batch file and print what happened
    pub fn ingest_file(&mut self, path: &Path) -> SessionResult<()> {
        match ingest_file(&mut self.store, path) {
            Ok(report) => {
                self.print_notices(&report, true)?;
                self.console.say("Batch data from file inserted successfully!")?;
            }
            Err(IngestError::FileNotFound(_)) => self.console.say("File not found!")?,
            Err(e) => {
                warn!("Batch ingestion of {:?} failed: {}", path, e);
                self.console.say(format!("Could not read batch file: {}", e))?;
            }
        }
        Ok(())
    }

    fn terminate(&mut self) {
        info!("Session terminated");
        self.state = SessionState::Terminated;
    }

    /// Prompt for one answer; end of input terminates the session
    fn ask(&mut self, message: &str) -> SessionResult<Option<String>> {
        let answer = self.console.prompt(message)?;
        if answer.is_none() {
            self.terminate();
        }
        Ok(answer)
    }

    fn ask_two(&mut self, first: &str, second: &str) -> SessionResult<Option<(String, String)>> {
        let Some(a) = self.ask(first)? else {
            return Ok(None);
        };
        let Some(b) = self.ask(second)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    fn print_notices(&mut self, report: &BatchReport, numbered: bool) -> SessionResult<()> {
        for (line, notice) in &report.notices {
            if numbered {
                self.console.say(format!("Line {}: {}", line, notice))?;
            } else {
                self.console.say(notice)?;
            }
        }
        Ok(())
    }

    fn add_vertex(&mut self) -> SessionResult<()> {
        let Some(label) = self.ask("Enter the vertex name: ")? else {
            return Ok(());
        };
        if label.is_empty() {
            self.console.say("Vertex name cannot be empty.")?;
            return Ok(());
        }

        match self.store.add_vertex(&label) {
            Ok(()) => self.console.say(format!("Vertex '{}' added successfully!", label))?,
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn add_edge(&mut self) -> SessionResult<()> {
        if self.store.is_empty() {
            self.console.say("No vertices have been created yet!")?;
            return Ok(());
        }

        self.console.say(format!("Available vertices: {}", join(self.store.vertices())))?;
        let Some((start, end)) = self.ask_two("Enter the start vertex: ", "Enter the end vertex: ")? else {
            return Ok(());
        };

        if !self.store.contains_vertex(&start) || !self.store.contains_vertex(&end) {
            self.console.say("Vertex not found!")?;
            return Ok(());
        }

        let weight = if self.store.is_weighted() {
            let Some(token) = self.ask("Enter the edge weight: ")? else {
                return Ok(());
            };
            match parse_weight(&token) {
                Ok(w) => Some(w),
                Err(e) => {
                    self.console.say(e)?;
                    return Ok(());
                }
            }
        } else {
            None
        };

        match self.store.add_edge(&start, &end, weight) {
            Ok(_) => self.console.say(format!("Edge added between '{}' and '{}'!", start, end))?,
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn batch_from_file(&mut self) -> SessionResult<()> {
        let Some(name) = self.ask("Enter the file name: ")? else {
            return Ok(());
        };
        self.ingest_file(Path::new(&name))
    }

    fn batch_manual(&mut self) -> SessionResult<()> {
        let Some((vertex_line, edge_line)) = self.ask_two(
            "Enter the vertices separated by spaces: ",
            "Enter the edges as 'v1 v2 [weight]', separated by commas:\n",
        )?
        else {
            return Ok(());
        };

        let report = insert_items(&mut self.store, &vertex_line, &edge_line);
        self.print_notices(&report, false)?;
        self.console.say(format!(
            "Inserted {} vertices and {} edges.",
            report.vertices_added, report.edges_added
        ))?;
        Ok(())
    }

    fn display(&mut self) -> SessionResult<()> {
        self.console.say("Displaying graph...")?;
        self.console.say(format!("Vertices: [{}]", join(self.store.vertices())))?;
        self.console.say(format!("Edges: [{}]", join(self.store.edges())))?;

        let weighted: Vec<_> = self.store.edges().filter(|e| e.weight.is_some()).collect();
        if !weighted.is_empty() {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Source", "Target", "Weight"]);
            for edge in &weighted {
                table.add_row(vec![
                    edge.source.to_string(),
                    edge.target.to_string(),
                    edge.weight.map(|w| w.to_string()).unwrap_or_default(),
                ]);
            }
            self.console.say("Edge weights:")?;
            self.console.say(table)?;
        }

        match self.renderer.render(&self.store) {
            Ok(path) => self.console.say(format!("Graph rendered to {}", path.display()))?,
            Err(e) => {
                warn!("Rendering failed: {}", e);
                self.console.say(format!("Could not render graph: {}", e))?;
            }
        }
        Ok(())
    }

    fn order_and_size(&mut self) -> SessionResult<()> {
        self.console.say(format!("Order of the graph (number of vertices): {}", self.store.order()))?;
        self.console.say(format!("Size of the graph (number of edges): {}", self.store.size()))?;
        Ok(())
    }

    fn adjacency(&mut self) -> SessionResult<()> {
        let Some(vertex) = self.ask("Enter the vertex to list its adjacent vertices: ")? else {
            return Ok(());
        };
        if !self.store.contains_vertex(&vertex) {
            self.console.say("Vertex not found!")?;
            return Ok(());
        }

        if self.store.is_directed() {
            let incoming = self.store.predecessors(&vertex).unwrap_or_default();
            let outgoing = self.store.successors(&vertex).unwrap_or_default();
            self.console.say(format!("Incoming adjacent vertices: [{}]", join(incoming)))?;
            self.console.say(format!("Outgoing adjacent vertices: [{}]", join(outgoing)))?;
        } else {
            let neighbors = self.store.neighbors(&vertex).unwrap_or_default();
            self.console.say(format!("Adjacent vertices: [{}]", join(neighbors)))?;
        }
        Ok(())
    }

    fn degree(&mut self) -> SessionResult<()> {
        let Some(vertex) = self.ask("Enter the vertex to get its degree: ")? else {
            return Ok(());
        };

        match self.store.degree(&vertex) {
            Ok(Degree::Directed { in_degree, out_degree }) => {
                self.console.say(format!("In-degree: {}", in_degree))?;
                self.console.say(format!("Out-degree: {}", out_degree))?;
            }
            Ok(Degree::Undirected(degree)) => self.console.say(format!("Degree: {}", degree))?,
            Err(_) => self.console.say("Vertex not found!")?,
        }
        Ok(())
    }

    fn adjacency_test(&mut self) -> SessionResult<()> {
        let Some((v1, v2)) = self.ask_two("Enter the first vertex: ", "Enter the second vertex: ")? else {
            return Ok(());
        };
        if !self.store.contains_vertex(&v1) || !self.store.contains_vertex(&v2) {
            self.console.say("One or both vertices were not found!")?;
            return Ok(());
        }

        if self.store.has_edge(&v1, &v2) {
            self.console.say(format!("The vertices '{}' and '{}' are adjacent.", v1, v2))?;
        } else {
            self.console.say(format!("The vertices '{}' and '{}' are not adjacent.", v1, v2))?;
        }
        Ok(())
    }

    fn shortest_path(&mut self) -> SessionResult<()> {
        let Some((from, to)) = self.ask_two("Enter the source vertex: ", "Enter the target vertex: ")? else {
            return Ok(());
        };
        if !self.store.contains_vertex(&from) || !self.store.contains_vertex(&to) {
            self.console.say("One or both vertices were not found!")?;
            return Ok(());
        }

        match self.store.shortest_path(&from, &to) {
            Ok(result) => {
                self.console.say(format!("Shortest path cost: {}", result.cost))?;
                self.console.say(format!("Shortest path: {}", result))?;
            }
            Err(GraphError::NoPath { from, to }) => {
                self.console.say(format!("There is no path between '{}' and '{}'.", from, to))?;
            }
            Err(e) => self.console.say(e)?,
        }
        Ok(())
    }

    fn eulerian(&mut self) -> SessionResult<()> {
        if self.store.is_eulerian() {
            self.console.say("The graph is Eulerian.")?;
        } else {
            self.console.say("The graph is not Eulerian.")?;
        }
        Ok(())
    }
}

/// Resolve the graph mode, asking for whatever the configuration leaves open.
pub fn prompt_mode<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> SessionResult<GraphMode> {
    if let Some(mode) = config.mode() {
        return Ok(mode);
    }

    let directed = match config.directed {
        Some(directed) => directed,
        None => console.confirm("Is the graph directed?")?,
    };
    let weighted = match config.weighted {
        Some(weighted) => weighted,
        None => console.confirm("Is the graph weighted?")?,
    };
    Ok(GraphMode::new(directed, weighted))
}

/// The initial batch file: configured, or asked for once. Empty means none.
pub fn prompt_batch_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> SessionResult<Option<PathBuf>> {
    if let Some(path) = &config.batch_file {
        return Ok(Some(path.clone()));
    }

    let answer = console.prompt(
        "To load initial data from a file, enter the file name (or press Enter to continue): ",
    )?;
    Ok(answer.filter(|a| !a.is_empty()).map(PathBuf::from))
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderResult;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    struct CountingRenderer(Rc<Cell<usize>>);

    impl Renderer for CountingRenderer {
        fn render(&mut self, _store: &GraphStore) -> RenderResult<PathBuf> {
            self.0.set(self.0.get() + 1);
            Ok(PathBuf::from("memory"))
        }
    }

    fn session(mode: GraphMode, input: &str) -> (Session<Cursor<String>, Vec<u8>>, Rc<Cell<usize>>) {
        let renders = Rc::new(Cell::new(0));
        let console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let session = Session::new(
            GraphStore::new(mode),
            console,
            Box::new(CountingRenderer(Rc::clone(&renders))),
        );
        (session, renders)
    }

    fn output(session: Session<Cursor<String>, Vec<u8>>) -> String {
        let (_, console) = session.into_parts();
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_invalid_option_keeps_running() {
        let (mut session, _) = session(GraphMode::default(), "42\n");

        assert_eq!(session.step().unwrap(), SessionState::Running);
        assert!(output(session).contains("Invalid option! Please choose a valid option."));
    }

    #[test]
    fn test_exit_terminates() {
        let (mut session, _) = session(GraphMode::default(), "12\n1\n");

        session.run().unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
        assert!(session.store().is_empty());
        assert!(output(session).contains("Shutting down..."));
    }

    #[test]
    fn test_eof_terminates_mid_option() {
        let (mut session, _) = session(GraphMode::default(), "1\n");

        session.run().unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(session.store().order(), 0);
    }

    #[test]
    fn test_add_edge_needs_vertices() {
        let (mut session, _) = session(GraphMode::default(), "");

        session.dispatch(MenuOption::AddEdge).unwrap();
        assert!(output(session).contains("No vertices have been created yet!"));
    }

    #[test]
    fn test_weighted_edge_prompt() {
        let input = "1\na\n1\nb\n2\na\nb\nheavy\n2\na\nb\n4.5\n12\n";
        let (mut session, _) = session(GraphMode::new(false, true), input);

        session.run().unwrap();
        assert_eq!(session.store().edge_weight("b", "a"), Some(4.5));

        let out = output(session);
        assert!(out.contains("Invalid weight 'heavy'"));
        assert!(out.contains("Available vertices: a, b"));
        assert!(out.contains("Edge added between 'a' and 'b'!"));
    }

    #[test]
    fn test_display_renders() {
        let (mut session, renders) = session(GraphMode::new(true, true), "");
        session.store.add_vertex("a").unwrap();
        session.store.add_vertex("b").unwrap();
        session.store.add_edge("a", "b", Some(2.0)).unwrap();

        session.dispatch(MenuOption::Display).unwrap();
        assert_eq!(renders.get(), 1);

        let out = output(session);
        assert!(out.contains("Vertices: [a, b]"));
        assert!(out.contains("Edges: [(a, b, 2)]"));
        assert!(out.contains("Edge weights:"));
        assert!(out.contains("Graph rendered to memory"));
    }

    #[test]
    fn test_prompt_mode_uses_config_first() {
        let mut console = Console::new(Cursor::new("y\n"), Vec::new());
        let config = SessionConfig {
            directed: Some(false),
            ..Default::default()
        };

        let mode = prompt_mode(&mut console, &config).unwrap();
        assert_eq!(mode, GraphMode::new(false, true));

        let (_, out) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Is the graph weighted? (y/n): ");
    }

    #[test]
    fn test_prompt_mode_skips_console_when_configured() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let config = SessionConfig {
            directed: Some(true),
            weighted: Some(true),
            ..Default::default()
        };

        let mode = prompt_mode(&mut console, &config).unwrap();
        assert_eq!(mode, GraphMode::new(true, true));

        let (_, out) = console.into_inner();
        assert!(out.is_empty());
    }

    #[test]
    fn test_prompt_batch_file() {
        let mut console = Console::new(Cursor::new("\nroads.txt\n"), Vec::new());
        let config = SessionConfig::default();

        assert_eq!(prompt_batch_file(&mut console, &config).unwrap(), None);
        assert_eq!(
            prompt_batch_file(&mut console, &config).unwrap(),
            Some(PathBuf::from("roads.txt"))
        );
    }
}
