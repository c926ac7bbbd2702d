//! Core graph structure: a vertex table plus per-vertex outgoing edge lists.

use std::fmt;

use crate::types::{AlgoError, AlgoResult, Edge, EdgeKind, Vertex, VertexId};

use super::Graph;

/// Graph stored as adjacency lists. Suited to sparse graphs.
///
/// O(V + E) space complexity.
#[derive(Debug, Clone)]
pub struct AdjacencyList<T> {
    /// All vertices, indexed by id.
    vertices: Vec<Vertex<T>>,
    /// Outgoing edges, indexed by source id.
    adjacencies: Vec<Vec<Edge>>,
}

impl<T> AdjacencyList<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacencies: Vec::new(),
        }
    }

    /// Create a graph with the same vertices (and ids) as `other` and no
    /// edges.
    pub fn with_vertices_of(other: &AdjacencyList<T>) -> Self
    where
        T: Clone,
    {
        Self {
            vertices: other.vertices.clone(),
            adjacencies: vec![Vec::new(); other.vertices.len()],
        }
    }

    /// Register a vertex, returning its stable id.
    ///
    /// O(1) time complexity
    pub fn create_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { id, data });
        self.adjacencies.push(Vec::new());
        id
    }

    /// Add an edge between two registered vertices.
    ///
    /// Undirected edges are stored as one directed edge each way.
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> AlgoResult<()> {
        // Validate: both endpoints exist
        if !self.contains_vertex(source) {
            return Err(AlgoError::VertexNotFound(source.index()));
        }
        if !self.contains_vertex(destination) {
            return Err(AlgoError::VertexNotFound(destination.index()));
        }

        // Validate: weight is a usable number
        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(AlgoError::InvalidWeight(w));
            }
        }

        let edge = Edge::new(source, destination, weight);
        self.push_edge(edge);
        if kind == EdgeKind::Undirected {
            self.push_edge(edge.reversed());
        }
        Ok(())
    }

    /// Add a directed edge.
    pub fn add_directed_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> AlgoResult<()> {
        self.add_edge(EdgeKind::Directed, source, destination, weight)
    }

    /// Add an undirected edge.
    pub fn add_undirected_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Option<f64>,
    ) -> AlgoResult<()> {
        self.add_edge(EdgeKind::Undirected, source, destination, weight)
    }

    /// Append an edge whose endpoints are known to be registered.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.adjacencies[edge.source.index()].push(edge);
    }

    /// Get all edges from a source vertex.
    ///
    /// O(1) time complexity
    pub fn edges_from(&self, source: VertexId) -> &[Edge] {
        self.adjacencies
            .get(source.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All vertices in registration order.
    pub fn all_vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// Get a vertex's payload by id.
    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(|vertex| &vertex.data)
    }

    /// Id of the first vertex carrying `data`.
    ///
    /// O(V) time complexity
    pub fn find(&self, data: &T) -> Option<VertexId>
    where
        T: PartialEq,
    {
        self.vertices
            .iter()
            .find(|vertex| &vertex.data == data)
            .map(|vertex| vertex.id)
    }

    /// Weight of the first edge `source -> destination`, if any.
    ///
    /// O(out-degree) time complexity
    pub fn weight(&self, source: VertexId, destination: VertexId) -> Option<f64> {
        Graph::weight(self, source, destination)
    }

    /// Whether `id` names a registered vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph for AdjacencyList<T> {
    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|vertex| vertex.id).collect()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        AdjacencyList::contains_vertex(self, id)
    }

    fn edges_from(&self, source: VertexId) -> &[Edge] {
        AdjacencyList::edges_from(self, source)
    }
}

impl<T: fmt::Display> fmt::Display for AdjacencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.adjacencies) {
            let destinations: Vec<String> = edges
                .iter()
                .filter_map(|edge| self.data(edge.destination))
                .map(|data| data.to_string())
                .collect();
            writeln!(f, "{} ---> [ {} ]", vertex.data, destinations.join(", "))?;
        }
        Ok(())
    }
}
