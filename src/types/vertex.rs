//! Vertex identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Opaque handle to a vertex: its index in the owning graph's vertex table.
///
/// Handles are cheap to copy, so algorithms keep these rather than
/// references to the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// The position of this vertex in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: a stable id plus the caller's payload.
///
/// Equality and hashing look at the id only.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<T> {
    /// Stable identity assigned at creation.
    pub id: VertexId,
    /// Caller-supplied payload.
    pub data: T,
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id.0, self.data)
    }
}
