//! Adjacency-list graphs and the traversals that run over them.

pub mod adjacency_list;
pub mod builder;
pub mod document;
pub mod traversal;

pub use adjacency_list::AdjacencyList;
pub use builder::GraphBuilder;
pub use document::{EdgeSpec, GraphDocument};
pub use traversal::{breadth_first_search, depth_first_search, traverse, TraversalOrder};

use crate::types::{Edge, VertexId};

/// Read-only view of a weighted graph, as consumed by the algorithms.
pub trait Graph {
    /// Ids of every registered vertex, in registration order.
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Whether `id` names a registered vertex.
    fn contains_vertex(&self, id: VertexId) -> bool;

    /// Outgoing edges of `source`, in insertion order. Empty for unknown ids.
    fn edges_from(&self, source: VertexId) -> &[Edge];

    /// Weight of the first edge `source -> destination`, if any.
    fn weight(&self, source: VertexId, destination: VertexId) -> Option<f64> {
        self.edges_from(source)
            .iter()
            .find(|edge| edge.destination == destination)
            .and_then(|edge| edge.weight)
    }
}
