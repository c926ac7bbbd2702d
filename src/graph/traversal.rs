//! Graph traversal algorithms (BFS, DFS).

use std::collections::HashSet;

use crate::collections::{Queue, QueueStack};
use crate::types::{AlgoError, AlgoResult, VertexId};

use super::Graph;

/// Order in which a traversal visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Finish each level before moving to the next.
    BreadthFirst,
    /// Follow a branch as far as possible before backtracking.
    DepthFirst,
}

impl TraversalOrder {
    /// Parse a traversal order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

/// Visit every vertex reachable from `source` in the given order.
pub fn traverse<G>(graph: &G, source: VertexId, order: TraversalOrder) -> AlgoResult<Vec<VertexId>>
where
    G: Graph + ?Sized,
{
    match order {
        TraversalOrder::BreadthFirst => breadth_first_search(graph, source),
        TraversalOrder::DepthFirst => depth_first_search(graph, source),
    }
}

/// Explore all of a vertex's neighbours before the next level.
///
/// O(V + E) time complexity, O(V) space complexity
pub fn breadth_first_search<G>(graph: &G, source: VertexId) -> AlgoResult<Vec<VertexId>>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(source) {
        return Err(AlgoError::VertexNotFound(source.index()));
    }

    let mut queue: QueueStack<VertexId> = QueueStack::new();
    let mut enqueued: HashSet<VertexId> = HashSet::new();
    let mut visited: Vec<VertexId> = Vec::new();

    queue.enqueue(source);
    enqueued.insert(source);

    while let Some(vertex) = queue.dequeue() {
        visited.push(vertex);
        for edge in graph.edges_from(vertex) {
            if enqueued.insert(edge.destination) {
                queue.enqueue(edge.destination);
            }
        }
    }

    log::debug!("bfs from {} visited {} vertices", source, visited.len());
    Ok(visited)
}

/// Follow each branch as far as it goes before backtracking.
///
/// O(V + E) time complexity, O(V) space complexity
pub fn depth_first_search<G>(graph: &G, source: VertexId) -> AlgoResult<Vec<VertexId>>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(source) {
        return Err(AlgoError::VertexNotFound(source.index()));
    }

    let mut pushed: HashSet<VertexId> = HashSet::new();
    let mut visited: Vec<VertexId> = Vec::new();
    depth_first_visit(graph, source, &mut visited, &mut pushed);

    log::debug!("dfs from {} visited {} vertices", source, visited.len());
    Ok(visited)
}

fn depth_first_visit<G>(
    graph: &G,
    vertex: VertexId,
    visited: &mut Vec<VertexId>,
    pushed: &mut HashSet<VertexId>,
) where
    G: Graph + ?Sized,
{
    pushed.insert(vertex);
    visited.push(vertex);

    for edge in graph.edges_from(vertex) {
        if !pushed.contains(&edge.destination) {
            depth_first_visit(graph, edge.destination, visited, pushed);
        }
    }
}
