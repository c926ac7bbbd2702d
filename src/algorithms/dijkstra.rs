//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a [`PriorityQueue`] of vertices ordered by their current
//! best distance from the source. Distances are never cached: the
//! comparator walks the live predecessor chain on every comparison, so a
//! vertex whose distance improved after it was enqueued is ordered by its
//! new distance. A vertex may sit in the queue several times; the extra
//! entries cost redundant dequeues but never change the result.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::collections::PriorityQueue;
use crate::graph::Graph;
use crate::types::{AlgoError, AlgoResult, Edge, VertexId};

/// How the best known path reaches a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathRecord {
    /// The source vertex itself.
    Start,
    /// Reached by following this edge from its source.
    ReachedVia(Edge),
}

type PathMap = HashMap<VertexId, PathRecord>;

/// Best predecessor edge of every vertex reached from a source.
///
/// Walking `ReachedVia` edges backwards from any recorded vertex ends at the
/// source's `Start` record.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    paths: PathMap,
    comparisons: usize,
}

impl ShortestPaths {
    /// The vertex the search started from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The record for `vertex`, or `None` if it was never reached.
    pub fn record(&self, vertex: VertexId) -> Option<&PathRecord> {
        self.paths.get(&vertex)
    }

    /// Whether `vertex` was reached.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.paths.contains_key(&vertex)
    }

    /// Edges from the source to `destination`, in travel order.
    ///
    /// Empty for the source itself and for unreached vertices.
    pub fn path_to(&self, destination: VertexId) -> Vec<Edge> {
        route(destination, &self.paths)
    }

    /// Sum of edge weights along the best path, or `None` if unreached.
    pub fn distance_to(&self, destination: VertexId) -> Option<f64> {
        if self.contains(destination) {
            Some(distance(destination, &self.paths))
        } else {
            None
        }
    }

    /// Reached vertices in id order (the source included).
    pub fn reached(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.paths.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Number of reached vertices (the source included).
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing was reached. Never true for a successful search.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Frontier comparisons the search performed.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

/// Find the shortest path from `source` to every reachable vertex.
///
/// Edges without a weight do not take part. Negative weights are skipped.
///
/// O(E log E) comparisons, each walking one predecessor chain.
pub fn shortest_paths<G>(graph: &G, source: VertexId) -> AlgoResult<ShortestPaths>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(source) {
        return Err(AlgoError::VertexNotFound(source.index()));
    }

    let paths: Rc<RefCell<PathMap>> =
        Rc::new(RefCell::new(HashMap::from([(source, PathRecord::Start)])));

    let comparisons = Cell::new(0usize);
    let counter = &comparisons;
    let frontier_paths = Rc::clone(&paths);
    let mut queue = PriorityQueue::new(move |a: &VertexId, b: &VertexId| {
        counter.set(counter.get() + 1);
        let paths = frontier_paths.borrow();
        distance(*a, &paths) < distance(*b, &paths)
    });
    queue.enqueue(source);

    let mut dequeued = 0usize;
    while let Some(vertex) = queue.dequeue() {
        dequeued += 1;
        for edge in graph.edges_from(vertex) {
            let Some(weight) = edge.weight else {
                continue;
            };
            if weight < 0.0 {
                log::warn!(
                    "skipping negative edge {} -> {} ({})",
                    edge.source,
                    edge.destination,
                    weight
                );
                continue;
            }

            let improves = {
                let paths = paths.borrow();
                !paths.contains_key(&edge.destination)
                    || distance(vertex, &paths) + weight < distance(edge.destination, &paths)
            };
            if improves {
                log::trace!("relax {} -> {} ({})", edge.source, edge.destination, weight);
                paths
                    .borrow_mut()
                    .insert(edge.destination, PathRecord::ReachedVia(*edge));
                queue.enqueue(edge.destination);
            }
        }
    }
    drop(queue);

    let paths = Rc::try_unwrap(paths)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone());

    let comparisons = comparisons.get();
    log::debug!(
        "dijkstra from {} reached {} vertices after {} dequeues and {} comparisons",
        source,
        paths.len(),
        dequeued,
        comparisons
    );

    Ok(ShortestPaths {
        source,
        paths,
        comparisons,
    })
}

/// Edges from the search's source to `destination`, in travel order.
///
/// Empty when `destination` has no record.
pub fn path_to(destination: VertexId, paths: &ShortestPaths) -> Vec<Edge> {
    paths.path_to(destination)
}

fn route(destination: VertexId, paths: &PathMap) -> Vec<Edge> {
    let mut vertex = destination;
    let mut path = Vec::new();
    while let Some(PathRecord::ReachedVia(edge)) = paths.get(&vertex) {
        path.push(*edge);
        vertex = edge.source;
    }
    path.reverse();
    path
}

fn distance(destination: VertexId, paths: &PathMap) -> f64 {
    let mut vertex = destination;
    let mut total = 0.0;
    while let Some(PathRecord::ReachedVia(edge)) = paths.get(&vertex) {
        total += edge.weight.unwrap_or(0.0);
        vertex = edge.source;
    }
    total
}
