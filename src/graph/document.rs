//! JSON graph documents, as read by the CLI.
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [
//!     { "from": "A", "to": "B", "weight": 1.0, "kind": "undirected" },
//!     { "from": "B", "to": "C" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{AlgoResult, EdgeKind};

use super::{AdjacencyList, GraphBuilder};

/// One edge of a graph document. `kind` defaults to directed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source vertex label.
    pub from: String,
    /// Destination vertex label.
    pub to: String,
    /// Optional weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Directed or undirected.
    #[serde(default)]
    pub kind: EdgeKind,
}

/// A labelled graph as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex labels in registration order.
    pub vertices: Vec<String>,
    /// Edges between labelled vertices.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> AlgoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document from a JSON file.
    pub fn read_from_file(path: &Path) -> AlgoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Resolve labels and build the graph.
    pub fn to_graph(&self) -> AlgoResult<AdjacencyList<String>> {
        let mut builder = GraphBuilder::new();
        builder.vertices(self.vertices.iter().cloned());
        for edge in &self.edges {
            builder.edge(edge.kind, edge.from.as_str(), edge.to.as_str(), edge.weight);
        }
        builder.build()
    }
}
