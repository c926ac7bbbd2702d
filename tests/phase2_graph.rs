//! Phase 2 tests: adjacency list, builder, JSON documents, traversal.

use algokit::graph::{
    breadth_first_search, depth_first_search, traverse, AdjacencyList, Graph, GraphBuilder,
    GraphDocument, TraversalOrder,
};
use algokit::types::{AlgoError, EdgeKind, VertexId};

fn labels(graph: &AdjacencyList<String>, ids: &[VertexId]) -> Vec<String> {
    ids.iter()
        .map(|&id| graph.data(id).unwrap().clone())
        .collect()
}

// ==================== Adjacency List Tests ====================

#[test]
fn test_create_vertex_assigns_sequential_ids() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.data(b), Some(&"B"));
    assert_eq!(graph.vertex_ids(), vec![a, b]);
    assert_eq!(graph.vertex(b).unwrap().to_string(), "1: B");
}

#[test]
fn test_directed_edge_one_way() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");
    graph.add_directed_edge(a, b, Some(2.5)).unwrap();

    assert_eq!(graph.edges_from(a).len(), 1);
    assert!(graph.edges_from(b).is_empty());
    assert_eq!(graph.weight(a, b), Some(2.5));
    assert_eq!(graph.weight(b, a), None);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_edge_both_ways() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");
    graph.add_undirected_edge(a, b, Some(1.0)).unwrap();

    assert_eq!(graph.weight(a, b), Some(1.0));
    assert_eq!(graph.weight(b, a), Some(1.0));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges_from(b)[0].destination, a);
}

#[test]
fn test_edges_keep_insertion_order() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex(0);
    let b = graph.create_vertex(1);
    let c = graph.create_vertex(2);
    graph.add_directed_edge(a, c, None).unwrap();
    graph.add_directed_edge(a, b, None).unwrap();

    let destinations: Vec<VertexId> = graph.edges_from(a).iter().map(|e| e.destination).collect();
    assert_eq!(destinations, vec![c, b]);
}

#[test]
fn test_edge_to_unregistered_vertex_rejected() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");

    let mut other = AdjacencyList::new();
    other.create_vertex("X");
    let stranger = other.create_vertex("Y");

    match graph.add_directed_edge(a, stranger, Some(1.0)) {
        Err(AlgoError::VertexNotFound(1)) => {}
        other => panic!("Expected VertexNotFound(1), got {:?}", other),
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_non_finite_weight_rejected() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");

    assert!(matches!(
        graph.add_directed_edge(a, b, Some(f64::NAN)),
        Err(AlgoError::InvalidWeight(_))
    ));
    assert!(matches!(
        graph.add_undirected_edge(a, b, Some(f64::INFINITY)),
        Err(AlgoError::InvalidWeight(_))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_from_unknown_vertex_is_empty() {
    let graph: AdjacencyList<&str> = AdjacencyList::new();
    let mut other = AdjacencyList::new();
    let id = other.create_vertex("A");
    assert!(graph.edges_from(id).is_empty());
    assert!(graph.vertex(id).is_none());
}

#[test]
fn test_with_vertices_of_copies_ids_without_edges() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");
    graph.add_undirected_edge(a, b, Some(3.0)).unwrap();

    let copy = AdjacencyList::with_vertices_of(&graph);
    assert_eq!(copy.vertex_count(), 2);
    assert_eq!(copy.edge_count(), 0);
    assert_eq!(copy.data(b), Some(&"B"));
}

#[test]
fn test_find_by_data() {
    let mut graph = AdjacencyList::new();
    graph.create_vertex("A");
    let b = graph.create_vertex("B");
    assert_eq!(graph.find(&"B"), Some(b));
    assert_eq!(graph.find(&"Z"), None);
}

#[test]
fn test_display_lists_destinations() {
    let mut graph = AdjacencyList::new();
    let a = graph.create_vertex("A");
    let b = graph.create_vertex("B");
    let c = graph.create_vertex("C");
    graph.add_directed_edge(a, b, None).unwrap();
    graph.add_directed_edge(a, c, None).unwrap();

    assert_eq!(
        graph.to_string(),
        "A ---> [ B, C ]\nB ---> [  ]\nC ---> [  ]\n"
    );
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_resolves_labels() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["A", "B", "C"])
        .undirected("A", "B", 1.0)
        .directed("B", "C", 2.0)
        .unweighted(EdgeKind::Directed, "C", "A");
    let graph = builder.build().unwrap();

    let a = graph.find(&"A".to_string()).unwrap();
    let b = graph.find(&"B".to_string()).unwrap();
    let c = graph.find(&"C".to_string()).unwrap();
    assert_eq!(a.index(), 0);
    assert_eq!(graph.weight(b, a), Some(1.0));
    assert_eq!(graph.weight(b, c), Some(2.0));
    assert_eq!(graph.weight(c, b), None);
    assert_eq!(graph.edges_from(c)[0].weight, None);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_builder_unknown_label() {
    let mut builder = GraphBuilder::new();
    builder.vertex("A").directed("A", "Q", 1.0);
    match builder.build() {
        Err(AlgoError::UnknownLabel(label)) => assert_eq!(label, "Q"),
        other => panic!("Expected UnknownLabel, got {:?}", other),
    }
}

#[test]
fn test_builder_duplicate_label() {
    let mut builder = GraphBuilder::new();
    builder.vertex("A").vertex("A");
    assert!(matches!(builder.build(), Err(AlgoError::DuplicateLabel(_))));
}

// ==================== Document Tests ====================

#[test]
fn test_document_parses_and_defaults_kind() {
    let json = r#"{
        "vertices": ["A", "B", "C"],
        "edges": [
            { "from": "A", "to": "B", "weight": 1.5, "kind": "undirected" },
            { "from": "B", "to": "C" }
        ]
    }"#;
    let document = GraphDocument::from_json(json).unwrap();
    assert_eq!(document.edges[0].kind, EdgeKind::Undirected);
    assert_eq!(document.edges[1].kind, EdgeKind::Directed);
    assert_eq!(document.edges[1].weight, None);
    assert_eq!(document.edges[0].kind.to_string(), "undirected");

    let graph = document.to_graph().unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_document_without_edges() {
    let document = GraphDocument::from_json(r#"{ "vertices": ["only"] }"#).unwrap();
    let graph = document.to_graph().unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_document_malformed_json() {
    assert!(matches!(
        GraphDocument::from_json("{ not json"),
        Err(AlgoError::Json(_))
    ));
}

// ==================== Traversal Tests ====================

/// A -> B, A -> C, B -> D, C -> D, D -> E, plus an isolated F.
fn diamond() -> AdjacencyList<String> {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["A", "B", "C", "D", "E", "F"])
        .unweighted(EdgeKind::Directed, "A", "B")
        .unweighted(EdgeKind::Directed, "A", "C")
        .unweighted(EdgeKind::Directed, "B", "D")
        .unweighted(EdgeKind::Directed, "C", "D")
        .unweighted(EdgeKind::Directed, "D", "E");
    builder.build().unwrap()
}

#[test]
fn test_bfs_visits_level_by_level() {
    let graph = diamond();
    let a = graph.find(&"A".to_string()).unwrap();
    let visited = breadth_first_search(&graph, a).unwrap();
    assert_eq!(labels(&graph, &visited), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_dfs_follows_branch_first() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["A", "B", "C", "D"])
        .unweighted(EdgeKind::Directed, "A", "B")
        .unweighted(EdgeKind::Directed, "A", "C")
        .unweighted(EdgeKind::Directed, "B", "D");
    let graph = builder.build().unwrap();
    let a = graph.find(&"A".to_string()).unwrap();

    let dfs = depth_first_search(&graph, a).unwrap();
    assert_eq!(labels(&graph, &dfs), vec!["A", "B", "D", "C"]);

    let bfs = breadth_first_search(&graph, a).unwrap();
    assert_eq!(labels(&graph, &bfs), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_traversal_handles_cycles() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["A", "B", "C"])
        .unweighted(EdgeKind::Undirected, "A", "B")
        .unweighted(EdgeKind::Undirected, "B", "C")
        .unweighted(EdgeKind::Undirected, "C", "A");
    let graph = builder.build().unwrap();
    let a = graph.find(&"A".to_string()).unwrap();

    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let visited = traverse(&graph, a, order).unwrap();
        assert_eq!(visited.len(), 3);
    }
}

#[test]
fn test_traversal_from_unknown_vertex() {
    let graph = diamond();
    let mut bigger = AdjacencyList::new();
    let ids: Vec<VertexId> = (0..10).map(|i| bigger.create_vertex(i)).collect();
    let last = ids[9];
    assert!(matches!(
        breadth_first_search(&graph, last),
        Err(AlgoError::VertexNotFound(9))
    ));
    assert!(matches!(
        depth_first_search(&graph, last),
        Err(AlgoError::VertexNotFound(9))
    ));
}

#[test]
fn test_traversal_order_names() {
    assert_eq!(TraversalOrder::from_name("BFS"), Some(TraversalOrder::BreadthFirst));
    assert_eq!(TraversalOrder::from_name("dfs"), Some(TraversalOrder::DepthFirst));
    assert_eq!(TraversalOrder::from_name("sideways"), None);
}
