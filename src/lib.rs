//! convgraph: an in-memory directed labeled graph with shortest-path queries.
//!
//! Nodes are identified by strings and hold their outgoing edges; each edge
//! carries a value of a caller-chosen type. [`Graph::path`] finds a
//! fewest-hop route between two nodes and [`Graph::weights`] reads the edge
//! values along it, which makes the graph a natural fit for unit-conversion
//! chains.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{ConversionTable, TableEntry, TableReader, TableWriter};
pub use graph::{
    bfs, create_dag, create_dg, Connection, Graph, GraphBuilder, Node, NodeEdge, Prelude,
};
pub use types::{nearly_equal, reciprocal, CgError, CgResult, Edge, FACTOR_EPSILON};
