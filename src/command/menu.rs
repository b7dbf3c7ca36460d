//! Menu options of the interactive session

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    AddVertex,
    AddEdge,
    BatchFromFile,
    BatchManual,
    Display,
    OrderAndSize,
    Adjacency,
    Degree,
    AdjacencyTest,
    ShortestPath,
    Eulerian,
    Exit,
}

impl MenuOption {
    /// All options in menu order; the position plus one is the menu number.
    pub const ALL: [MenuOption; 12] = [
        MenuOption::AddVertex,
        MenuOption::AddEdge,
        MenuOption::BatchFromFile,
        MenuOption::BatchManual,
        MenuOption::Display,
        MenuOption::OrderAndSize,
        MenuOption::Adjacency,
        MenuOption::Degree,
        MenuOption::AdjacencyTest,
        MenuOption::ShortestPath,
        MenuOption::Eulerian,
        MenuOption::Exit,
    ];

    /// Map a typed selection ("1".."12") to an option.
    pub fn from_token(token: &str) -> Option<Self> {
        let number: usize = token.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|&o| o == self).map_or(0, |p| p + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuOption::AddVertex => "Add vertex",
            MenuOption::AddEdge => "Add edge",
            MenuOption::BatchFromFile => "Insert batch data from a file",
            MenuOption::BatchManual => "Insert batch items manually",
            MenuOption::Display => "Display graph",
            MenuOption::OrderAndSize => "Get order and size of the graph",
            MenuOption::Adjacency => "Get adjacent vertices of a vertex",
            MenuOption::Degree => "Get degree of a vertex",
            MenuOption::AdjacencyTest => "Check whether two vertices are adjacent",
            MenuOption::ShortestPath => "Find the shortest path between two vertices",
            MenuOption::Eulerian => "Check whether the graph is Eulerian",
            MenuOption::Exit => "Exit",
        }
    }

    /// The full menu listing
    pub fn listing() -> String {
        let mut out = String::from("Options:\n");
        for option in Self::ALL {
            out.push_str(&format!("{}\n", option));
        }
        out
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(MenuOption::from_token("1"), Some(MenuOption::AddVertex));
        assert_eq!(MenuOption::from_token(" 12 "), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_token("0"), None);
        assert_eq!(MenuOption::from_token("13"), None);
        assert_eq!(MenuOption::from_token("quit"), None);
        assert_eq!(MenuOption::from_token(""), None);
    }

    #[test]
    fn test_numbers_round_trip() {
        for (idx, option) in MenuOption::ALL.iter().enumerate() {
            assert_eq!(option.number(), idx + 1);
            assert_eq!(MenuOption::from_token(&option.number().to_string()), Some(*option));
        }
    }

    #[test]
    fn test_listing() {
        let listing = MenuOption::listing();
        assert!(listing.starts_with("Options:\n1. Add vertex\n"));
        assert!(listing.ends_with("12. Exit\n"));
    }
}
