//! Error types for the algokit library.

use thiserror::Error;

/// All errors that can occur in the algokit library.
///
/// Container operations never fail; they report absence with `Option`.
/// These variants cover graph construction and the CLI's file handling.
#[derive(Error, Debug)]
pub enum AlgoError {
    /// Vertex index is not registered in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// Edge weight is NaN or infinite.
    #[error("Edge weight must be finite: {0}")]
    InvalidWeight(f64),

    /// A value to sort is NaN or infinite.
    #[error("Value must be finite: {0}")]
    InvalidValue(f64),

    /// A label that does not name any vertex.
    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    /// The same label was declared twice.
    #[error("Duplicate vertex label: {0}")]
    DuplicateLabel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for algokit operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
