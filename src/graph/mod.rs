//! In-memory graph: storage, traversal and path queries.

pub mod builder;
pub mod labeled_graph;
pub mod node;
pub mod query;
pub mod traversal;

pub use builder::{create_dag, create_dg, Connection, GraphBuilder};
pub use labeled_graph::{Graph, NodeEdge};
pub use node::Node;
pub use traversal::{bfs, Prelude};
