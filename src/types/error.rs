//! Error types for the convgraph library.
//!
//! Graph queries never fail; these errors come from loading conversion
//! tables and from the command-line front end.

use thiserror::Error;

/// All errors that can occur outside the infallible graph core.
#[derive(Error, Debug)]
pub enum CgError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Table is not valid JSON or does not match the table layout.
    #[error("Malformed conversion table: {0}")]
    Json(#[from] serde_json::Error),

    /// A connection names a node with an empty id.
    #[error("Connection {0} has an empty node id")]
    EmptyId(usize),

    /// A factor cannot be inverted for a bidirectional table.
    #[error("Connection {index} has a non-invertible factor: {value}")]
    InvalidFactor { index: usize, value: f64 },

    /// Node id not present in the graph.
    #[error("Node '{0}' not found")]
    UnknownNode(String),

    /// Both nodes exist but no path connects them.
    #[error("No path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },
}

/// Convenience result type for convgraph operations.
pub type CgResult<T> = Result<T, CgError>;
