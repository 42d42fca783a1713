//! Nodes: an id plus the outgoing edges recorded on it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::Edge;

/// A uniquely identified vertex holding its own outgoing edges.
///
/// Outgoing edges are kept in insertion order, which is the order the
/// traversal engine enumerates neighbors in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<V> {
    id: String,
    connected: IndexMap<String, Edge<V>>,
}

impl<V> Node<V> {
    /// Create a node with no outgoing edges.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            connected: IndexMap::new(),
        }
    }

    /// The node id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read-only view of the outgoing edges, keyed by neighbor id.
    pub fn connected(&self) -> &IndexMap<String, Edge<V>> {
        &self.connected
    }

    /// The edge toward `neighbor`, if one is recorded.
    pub fn edge_to(&self, neighbor: &str) -> Option<&Edge<V>> {
        self.connected.get(neighbor)
    }

    /// Neighbor ids in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = &str> {
        self.connected.keys().map(String::as_str)
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.connected.len()
    }

    /// Record `edge` toward `neighbor`, replacing any previous edge to it.
    ///
    /// A replaced edge keeps the neighbor's original position.
    pub fn connect_to(&mut self, neighbor: impl Into<String>, edge: Edge<V>) {
        self.connected.insert(neighbor.into(), edge);
    }

    /// Move the outgoing edges of `other` onto this node for neighbors it
    /// has no edge to yet. Existing edges win.
    pub(crate) fn absorb(&mut self, other: Node<V>) {
        for (neighbor, edge) in other.connected {
            self.connected.entry(neighbor).or_insert(edge);
        }
    }
}

impl<V: Default> Node<V> {
    /// Record an edge toward `other`.
    ///
    /// Does nothing when `other` is `None`. A missing edge is recorded as
    /// the zero-valued edge. Only this node is modified.
    pub fn connect(&mut self, other: Option<&Node<V>>, edge: Option<Edge<V>>) {
        let Some(other) = other else {
            return;
        };
        self.connect_to(other.id.clone(), edge.unwrap_or_default());
    }
}
