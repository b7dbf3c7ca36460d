pub mod common;
pub mod community;
pub mod eulerian;
pub mod pathfinding;

pub use common::{GraphView, NodeId};
pub use community::{weakly_connected_components, WccResult, strongly_connected_components, SccResult};
pub use eulerian::{has_eulerian_circuit, unbalanced_nodes};
pub use pathfinding::{bfs, dijkstra, PathResult};
