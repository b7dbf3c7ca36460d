//! Freeform batch items typed at the prompt
//!
//! Vertices come as one space-separated line. Edges come as one line of
//! comma-separated specs, each `u v [weight]`; the weight is honoured only on
//! weighted graphs and only when the edge spec has exactly three tokens.

use super::batch::BatchReport;
use super::{parse_weight, EdgeSpec, IngestError};
use crate::graph::GraphStore;
use tracing::info;

pub fn parse_vertex_line(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a comma-separated edge line, one result per spec. Empty specs
/// (a blank line, a trailing comma) are invalid like any other short spec.
pub fn parse_edge_specs(line: &str, weighted: bool) -> Vec<Result<EdgeSpec, IngestError>> {
    line.split(',')
        .map(str::trim)
        .map(|spec| {
            let tokens: Vec<&str> = spec.split_whitespace().collect();
            if tokens.len() < 2 {
                return Err(IngestError::InvalidEdgeSpec(spec.to_string()));
            }
            let weight = if weighted && tokens.len() == 3 {
                Some(parse_weight(tokens[2])?)
            } else {
                None
            };
            Ok(EdgeSpec::new(tokens[0], tokens[1], weight))
        })
        .collect()
}

/// Insert a vertex line and an edge line.
///
/// Notices carry the position of the offending item: the vertex position for
/// duplicates, the edge spec position for edges.
pub fn insert_items(store: &mut GraphStore, vertex_line: &str, edge_line: &str) -> BatchReport {
    let mut report = BatchReport::default();

    for (idx, label) in parse_vertex_line(vertex_line).into_iter().enumerate() {
        match store.add_vertex(label) {
            Ok(()) => report.vertices_added += 1,
            Err(e) => report.notices.push((idx + 1, e.into())),
        }
    }

    let weighted = store.is_weighted();
    for (idx, spec) in parse_edge_specs(edge_line, weighted).into_iter().enumerate() {
        match spec.and_then(|spec| spec.apply(store).map_err(IngestError::from)) {
            Ok(update) => report.record_edge(update),
            Err(e) => report.notices.push((idx + 1, e)),
        }
    }

    info!(
        "Manual items inserted: {} vertices, {} edges added, {} notices",
        report.vertices_added,
        report.edges_added,
        report.notices.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphError, GraphMode};

    #[test]
    fn test_parse_edge_specs() {
        let specs = parse_edge_specs("a b 2, b c, c, d e 1 9,", true);

        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].as_ref().unwrap(), &EdgeSpec::new("a", "b", Some(2.0)));
        assert_eq!(specs[1].as_ref().unwrap(), &EdgeSpec::new("b", "c", None));
        assert!(matches!(&specs[2], Err(IngestError::InvalidEdgeSpec(s)) if s == "c"));
        // Four tokens: weight ignored
        assert_eq!(specs[3].as_ref().unwrap(), &EdgeSpec::new("d", "e", None));
        // Trailing comma
        assert!(matches!(&specs[4], Err(IngestError::InvalidEdgeSpec(s)) if s.is_empty()));
    }

    #[test]
    fn test_unweighted_ignores_weight() {
        let specs = parse_edge_specs("a b 2", false);
        assert_eq!(specs[0].as_ref().unwrap(), &EdgeSpec::new("a", "b", None));
    }

    #[test]
    fn test_insert_items() {
        let mut store = GraphStore::new(GraphMode::new(true, true));
        store.add_vertex("a").unwrap();

        let report = insert_items(&mut store, "a b c", "a b 1.5, b c, c z");

        assert_eq!(store.order(), 3);
        assert_eq!(store.size(), 2);
        assert_eq!(store.edge_weight("a", "b"), Some(1.5));
        assert_eq!(report.vertices_added, 2);
        assert_eq!(report.edges_added, 2);
        assert_eq!(report.notices.len(), 2);
        assert_eq!(report.notices[0].0, 1);
        assert_eq!(report.notices[1].0, 3);
    }

    #[test]
    fn test_empty_edge_line_is_invalid() {
        let mut store = GraphStore::new(GraphMode::default());
        let report = insert_items(&mut store, "a b", "");

        assert_eq!(store.order(), 2);
        assert_eq!(store.size(), 0);
        assert_eq!(report.notices.len(), 1);
        assert!(matches!(&report.notices[0], (1, IngestError::InvalidEdgeSpec(s)) if s.is_empty()));
    }

    #[test]
    fn test_empty_spec_keeps_positions() {
        let mut store = GraphStore::new(GraphMode::default());
        let report = insert_items(&mut store, "a", ", a x");

        assert_eq!(report.notices.len(), 2);
        assert!(matches!(&report.notices[0], (1, IngestError::InvalidEdgeSpec(_))));
        assert!(matches!(
            &report.notices[1],
            (2, IngestError::Graph(GraphError::InvalidEdgeTarget(v))) if v == "x"
        ));
    }
}
