//! Edge kinds and the core edge struct.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Whether an edge is inserted in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Only `source -> destination`.
    #[default]
    Directed,
    /// Stored as two directed edges.
    Undirected,
}

impl EdgeKind {
    /// Return a human-readable name for this edge kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed, optionally weighted edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Origin of the edge.
    pub source: VertexId,
    /// Target of the edge.
    pub destination: VertexId,
    /// Cost of following the edge, if any.
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: VertexId, destination: VertexId, weight: Option<f64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The same edge with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
            weight: self.weight,
        }
    }
}
