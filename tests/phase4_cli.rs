//! Phase 4 tests: graph files and the report builders behind the CLI.

use std::io::Write;

use algokit::cli::commands::{
    shortest_path_reports, sorted_values, traversal_report, tree_report, PathReport,
};
use algokit::graph::{AdjacencyList, GraphDocument, TraversalOrder};
use algokit::types::AlgoError;
use tempfile::NamedTempFile;

const TRIANGLE: &str = r#"{
    "vertices": ["A", "B", "C", "D"],
    "edges": [
        { "from": "A", "to": "B", "weight": 1, "kind": "undirected" },
        { "from": "B", "to": "C", "weight": 2, "kind": "undirected" },
        { "from": "A", "to": "C", "weight": 4, "kind": "undirected" }
    ]
}"#;

fn write_graph(json: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(json.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn load(json: &str) -> AdjacencyList<String> {
    let tmp = write_graph(json);
    GraphDocument::read_from_file(tmp.path())
        .unwrap()
        .to_graph()
        .unwrap()
}

// ==================== Graph File Tests ====================

#[test]
fn test_read_graph_file() {
    let graph = load(TRIANGLE);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_missing_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(
        GraphDocument::read_from_file(&path),
        Err(AlgoError::Io(_))
    ));
}

#[test]
fn test_graph_file_with_bad_weight() {
    let tmp = write_graph(r#"{ "vertices": ["A"], "edges": [{ "from": "A", "to": "A", "weight": "heavy" }] }"#);
    assert!(matches!(
        GraphDocument::read_from_file(tmp.path()),
        Err(AlgoError::Json(_))
    ));
}

#[test]
fn test_graph_file_with_unknown_edge_label() {
    let tmp = write_graph(r#"{ "vertices": ["A"], "edges": [{ "from": "A", "to": "Z" }] }"#);
    let document = GraphDocument::read_from_file(tmp.path()).unwrap();
    match document.to_graph() {
        Err(AlgoError::UnknownLabel(label)) => assert_eq!(label, "Z"),
        other => panic!("Expected UnknownLabel, got {:?}", other),
    }
}

// ==================== Shortest Path Report Tests ====================

#[test]
fn test_shortest_path_single_target() {
    let graph = load(TRIANGLE);
    let reports = shortest_path_reports(&graph, "A", Some("C")).unwrap();
    assert_eq!(
        reports,
        vec![PathReport {
            from: "A".to_string(),
            to: "C".to_string(),
            distance: Some(3.0),
            hops: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        }]
    );
}

#[test]
fn test_shortest_path_all_targets() {
    let graph = load(TRIANGLE);
    let reports = shortest_path_reports(&graph, "A", None).unwrap();
    assert_eq!(reports.len(), 4);

    assert_eq!(reports[0].to, "A");
    assert_eq!(reports[0].distance, Some(0.0));
    assert_eq!(reports[0].hops, vec!["A"]);

    assert_eq!(reports[1].distance, Some(1.0));
    assert_eq!(reports[2].distance, Some(3.0));

    assert_eq!(reports[3].to, "D");
    assert_eq!(reports[3].distance, None);
    assert!(reports[3].hops.is_empty());
}

#[test]
fn test_shortest_path_unknown_labels() {
    let graph = load(TRIANGLE);
    assert!(matches!(
        shortest_path_reports(&graph, "Q", None),
        Err(AlgoError::UnknownLabel(_))
    ));
    assert!(matches!(
        shortest_path_reports(&graph, "A", Some("Q")),
        Err(AlgoError::UnknownLabel(_))
    ));
}

#[test]
fn test_path_report_serializes() {
    let graph = load(TRIANGLE);
    let reports = shortest_path_reports(&graph, "A", Some("D")).unwrap();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["to"], "D");
    assert!(json[0]["distance"].is_null());
}

// ==================== Tree Report Tests ====================

#[test]
fn test_tree_report() {
    let graph = load(TRIANGLE);
    let report = tree_report(&graph);

    assert_eq!(report.cost, 3.0);
    let pairs: Vec<(&str, &str)> = report
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    assert_eq!(report.edges[1].weight, Some(2.0));
    assert_eq!(report.unreached, vec!["D"]);
}

#[test]
fn test_tree_report_empty_graph() {
    let graph = load(r#"{ "vertices": [] }"#);
    let report = tree_report(&graph);
    assert_eq!(report.cost, 0.0);
    assert!(report.edges.is_empty());
    assert!(report.unreached.is_empty());
}

// ==================== Traversal Report Tests ====================

#[test]
fn test_traversal_report_orders() {
    let graph = load(
        r#"{
            "vertices": ["A", "B", "C", "D"],
            "edges": [
                { "from": "A", "to": "B" },
                { "from": "A", "to": "C" },
                { "from": "B", "to": "D" }
            ]
        }"#,
    );

    let bfs = traversal_report(&graph, "A", TraversalOrder::BreadthFirst).unwrap();
    assert_eq!(bfs.order, "bfs");
    assert_eq!(bfs.visited, vec!["A", "B", "C", "D"]);

    let dfs = traversal_report(&graph, "A", TraversalOrder::DepthFirst).unwrap();
    assert_eq!(dfs.order, "dfs");
    assert_eq!(dfs.visited, vec!["A", "B", "D", "C"]);
}

#[test]
fn test_traversal_report_unknown_label() {
    let graph = load(TRIANGLE);
    assert!(matches!(
        traversal_report(&graph, "nowhere", TraversalOrder::DepthFirst),
        Err(AlgoError::UnknownLabel(_))
    ));
}

// ==================== Sort Tests ====================

#[test]
fn test_sorted_values() {
    let values = vec![3.5, -1.0, 2.0, 0.0, 10.25];
    assert_eq!(
        sorted_values(values.clone(), false).unwrap(),
        vec![-1.0, 0.0, 2.0, 3.5, 10.25]
    );
    assert_eq!(
        sorted_values(values, true).unwrap(),
        vec![10.25, 3.5, 2.0, 0.0, -1.0]
    );
    assert!(sorted_values(Vec::new(), false).unwrap().is_empty());
}

#[test]
fn test_sorted_values_rejects_non_finite() {
    match sorted_values(vec![1.0, f64::NAN, 0.5], false) {
        Err(AlgoError::InvalidValue(v)) => assert!(v.is_nan()),
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
    assert!(matches!(
        sorted_values(vec![f64::INFINITY], true),
        Err(AlgoError::InvalidValue(_))
    ));
}
