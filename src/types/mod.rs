//! Shared value types: vertex handles, edges and errors.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, EdgeKind};
pub use error::{AlgoError, AlgoResult};
pub use vertex::{Vertex, VertexId};
