//! Minimum spanning tree (Prim).

use std::collections::HashSet;

use crate::collections::PriorityQueue;
use crate::graph::AdjacencyList;
use crate::types::{Edge, VertexId};

/// Result of [`minimum_spanning_tree`].
#[derive(Debug, Clone)]
pub struct SpanningTree<T> {
    /// Sum of the chosen edge weights (a missing weight counts as zero).
    pub cost: f64,
    /// Every vertex of the input graph plus the chosen edges, undirected.
    pub tree: AdjacencyList<T>,
    /// The chosen edges, one per pair, in the order they were picked.
    pub edges: Vec<Edge>,
}

impl<T> SpanningTree<T> {
    /// Number of undirected edges in the tree.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build a tree connecting every vertex reachable from the graph's first
/// vertex with the minimum sum of edge weights.
///
/// Edges without a weight compare as weight zero, so they are preferred
/// over any positive edge. Vertices the first vertex cannot reach are copied
/// into the tree without edges. An empty graph yields cost zero.
///
/// Takes an `AdjacencyList` rather than any [`Graph`](crate::graph::Graph)
/// because the tree is built by copying the input's vertex table.
///
/// O(E log E) time complexity
pub fn minimum_spanning_tree<T: Clone>(graph: &AdjacencyList<T>) -> SpanningTree<T> {
    let mut tree = AdjacencyList::with_vertices_of(graph);
    let mut cost = 0.0;
    let mut edges = Vec::new();

    let Some(start) = graph.all_vertices().first().map(|vertex| vertex.id) else {
        return SpanningTree { cost, tree, edges };
    };

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue =
        PriorityQueue::new(|a: &Edge, b: &Edge| a.weight.unwrap_or(0.0) < b.weight.unwrap_or(0.0));

    visited.insert(start);
    enqueue_available_edges(graph, start, &visited, &mut queue);

    while let Some(cheapest) = queue.dequeue() {
        let vertex = cheapest.destination;
        if !visited.insert(vertex) {
            continue;
        }

        cost += cheapest.weight.unwrap_or(0.0);
        tree.push_edge(cheapest);
        tree.push_edge(cheapest.reversed());
        edges.push(cheapest);

        enqueue_available_edges(graph, vertex, &visited, &mut queue);
    }

    log::debug!(
        "prim spanned {} of {} vertices with cost {}",
        visited.len(),
        graph.vertex_count(),
        cost
    );

    SpanningTree { cost, tree, edges }
}

fn enqueue_available_edges<T, F>(
    graph: &AdjacencyList<T>,
    vertex: VertexId,
    visited: &HashSet<VertexId>,
    queue: &mut PriorityQueue<Edge, F>,
) where
    F: Fn(&Edge, &Edge) -> bool,
{
    for edge in graph.edges_from(vertex) {
        if !visited.contains(&edge.destination) {
            queue.enqueue(*edge);
        }
    }
}
