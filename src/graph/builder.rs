//! Fluent API for building labelled graphs.

use std::collections::HashMap;

use crate::types::{AlgoError, AlgoResult, EdgeKind, VertexId};

use super::AdjacencyList;

/// An edge declared by label, resolved when the graph is built.
struct PendingEdge {
    kind: EdgeKind,
    from: String,
    to: String,
    weight: Option<f64>,
}

/// Fluent builder for an `AdjacencyList<String>` whose vertices are named.
///
/// Vertices are registered in declaration order, so the first declared
/// vertex gets id 0.
#[derive(Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, label: impl Into<String>) -> &mut Self {
        self.labels.push(label.into());
        self
    }

    /// Declare several vertices in order.
    pub fn vertices<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add an edge of any kind between two declared vertices.
    pub fn edge(
        &mut self,
        kind: EdgeKind,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: Option<f64>,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            kind,
            from: from.into(),
            to: to.into(),
            weight,
        });
        self
    }

    /// Add a weighted directed edge.
    pub fn directed(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        self.edge(EdgeKind::Directed, from, to, Some(weight))
    }

    /// Add a weighted undirected edge.
    pub fn undirected(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        self.edge(EdgeKind::Undirected, from, to, Some(weight))
    }

    /// Add an edge without a weight.
    pub fn unweighted(&mut self, kind: EdgeKind, from: &str, to: &str) -> &mut Self {
        self.edge(kind, from, to, None)
    }

    /// Build the final graph.
    ///
    /// Fails on a repeated vertex label, an edge naming an undeclared
    /// label, or a non-finite weight.
    pub fn build(self) -> AlgoResult<AdjacencyList<String>> {
        let mut graph = AdjacencyList::new();
        let mut ids: HashMap<String, VertexId> = HashMap::with_capacity(self.labels.len());

        for label in self.labels {
            if ids.contains_key(&label) {
                return Err(AlgoError::DuplicateLabel(label));
            }
            let id = graph.create_vertex(label.clone());
            ids.insert(label, id);
        }

        let resolve = |label: &str| {
            ids.get(label)
                .copied()
                .ok_or_else(|| AlgoError::UnknownLabel(label.to_string()))
        };

        for edge in &self.edges {
            let source = resolve(&edge.from)?;
            let destination = resolve(&edge.to)?;
            graph.add_edge(edge.kind, source, destination, edge.weight)?;
        }

        log::debug!(
            "built graph with {} vertices and {} directed edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}
