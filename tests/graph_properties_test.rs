use graphsmith::command::{ingest_str, IngestError};
use graphsmith::graph::{Degree, GraphError, GraphMode, GraphStore, VertexLabel};

fn undirected(weighted: bool) -> GraphStore {
    GraphStore::new(GraphMode::new(false, weighted))
}

#[test]
fn test_duplicate_labels_collapse_to_distinct_set() {
    let mut store = undirected(false);
    let labels = ["a", "b", "a", "c", "b", "a"];

    let rejected = labels
        .iter()
        .filter(|label| store.add_vertex(label).is_err())
        .count();

    assert_eq!(rejected, 3);
    let vertices: Vec<&str> = store.vertices().map(|v| v.as_str()).collect();
    assert_eq!(vertices, vec!["a", "b", "c"]);
}

#[test]
fn test_undirected_adjacency_is_symmetric() {
    let mut store = undirected(false);
    ingest_str(&mut store, "v a b c d\ne a b\ne c b\ne d d\n");

    for (u, v) in [("a", "b"), ("b", "c"), ("d", "d"), ("a", "c")] {
        assert_eq!(store.has_edge(u, v), store.has_edge(v, u), "{} {}", u, v);
    }
    assert!(!store.has_edge("a", "c"));
}

#[test]
fn test_edge_to_absent_vertex_is_rejected() {
    let mut store = undirected(false);
    store.add_vertex("a").unwrap();

    let result = store.add_edge("a", "ghost", None);

    assert_eq!(result, Err(GraphError::InvalidEdgeTarget("ghost".to_string())));
    assert_eq!(store.size(), 0);
    assert_eq!(store.edges().count(), 0);
}

#[test]
fn test_batch_weight_depends_on_mode() {
    let mut weighted = undirected(true);
    ingest_str(&mut weighted, "v a b\ne a b 3.5\n");
    assert_eq!(weighted.edge_weight("a", "b"), Some(3.5));

    let mut plain = undirected(false);
    ingest_str(&mut plain, "v a b\ne a b 3.5\n");
    assert!(plain.has_edge("a", "b"));
    assert_eq!(plain.edges().next().unwrap().weight, None);
}

#[test]
fn test_negative_batch_weight_is_reported_and_skipped() {
    let mut store = undirected(true);
    let report = ingest_str(&mut store, "v a b c\ne a b -1\ne b c 2\n");

    assert_eq!(report.notices.len(), 1);
    let (line, err) = &report.notices[0];
    assert_eq!(*line, 2);
    assert!(matches!(
        err,
        IngestError::Graph(GraphError::NegativeWeight { weight, .. }) if *weight == -1.0
    ));
    assert!(!store.has_edge("a", "b"));
    assert!(matches!(store.shortest_path("a", "b"), Err(GraphError::NoPath { .. })));
    assert_eq!(store.shortest_path("b", "c").unwrap().cost, 2.0);
}

#[test]
fn test_shortest_paths() {
    let mut plain = undirected(false);
    ingest_str(&mut plain, "v a b c\ne a b\ne b c\n");
    let result = plain.shortest_path("a", "c").unwrap();
    assert_eq!(
        result.path,
        vec![VertexLabel::new("a"), VertexLabel::new("b"), VertexLabel::new("c")]
    );
    assert_eq!(result.cost, 2.0);

    let mut weighted = undirected(true);
    ingest_str(&mut weighted, "v a b c\ne a b 1\ne b c 5\ne a c 3\n");
    let result = weighted.shortest_path("a", "c").unwrap();
    assert_eq!(result.path, vec![VertexLabel::new("a"), VertexLabel::new("c")]);
    assert_eq!(result.cost, 3.0);
}

#[test]
fn test_directed_shortest_path_respects_direction() {
    let mut store = GraphStore::new(GraphMode::new(true, false));
    ingest_str(&mut store, "v a b c\ne a b\ne b c\n");

    assert!(store.shortest_path("a", "c").is_ok());
    assert!(matches!(store.shortest_path("c", "a"), Err(GraphError::NoPath { .. })));
}

#[test]
fn test_eulerian_cycle() {
    let mut store = undirected(false);
    ingest_str(&mut store, "v a b c d\ne a b\ne b c\ne c d\n");
    assert!(!store.is_eulerian());

    ingest_str(&mut store, "e d a\n");
    assert!(store.is_eulerian());
}

#[test]
fn test_directed_eulerian_needs_balance() {
    let mut store = GraphStore::new(GraphMode::new(true, false));
    ingest_str(&mut store, "v a b c\ne a b\ne b c\ne c a\n");
    assert!(store.is_eulerian());

    ingest_str(&mut store, "e a c\n");
    assert!(!store.is_eulerian());
    assert_eq!(
        store.degree("a").unwrap(),
        Degree::Directed { in_degree: 1, out_degree: 2 }
    );
}

#[test]
fn test_no_path_is_an_error_value() {
    let mut store = undirected(true);
    ingest_str(&mut store, "v a b\n");

    assert_eq!(
        store.shortest_path("a", "b"),
        Err(GraphError::NoPath {
            from: "a".to_string(),
            to: "b".to_string()
        })
    );
}

#[test]
fn test_unknown_command_does_not_stop_batch() {
    let mut store = undirected(false);
    let report = ingest_str(&mut store, "v a\nadd b\nv b\ne a b\n");

    assert_eq!(store.order(), 2);
    assert_eq!(store.size(), 1);
    assert_eq!(report.notices.len(), 1);
    assert!(matches!(&report.notices[0], (2, IngestError::UnknownCommand { .. })));
}
