//! Graph construction from connection lists, plus a fluent builder.

use crate::types::Edge;

use super::{Graph, Node};

/// One directed association used to seed a graph.
#[derive(Debug, Clone)]
pub struct Connection<V> {
    /// Source node.
    pub left: Node<V>,
    /// Edge from `left` to `right`.
    pub edge: Edge<V>,
    /// Target node.
    pub right: Node<V>,
}

impl<V> Connection<V> {
    /// Create a connection from existing nodes and an edge.
    pub fn new(left: Node<V>, edge: Edge<V>, right: Node<V>) -> Self {
        Self { left, edge, right }
    }

    /// Create a connection between fresh nodes `from` and `to`.
    pub fn link(from: impl Into<String>, value: V, to: impl Into<String>) -> Self {
        Self::new(Node::new(from), Edge::new(value), Node::new(to))
    }
}

/// Build a directed graph by associating each connection in order.
///
/// Despite the name, cycles are accepted.
pub fn create_dag<V, I>(connections: I) -> Graph<V>
where
    V: Default,
    I: IntoIterator<Item = Connection<V>>,
{
    let mut graph = Graph::new();
    for c in connections {
        graph.associate(Some(c.left), Some(c.right), Some(c.edge));
    }
    graph
}

/// Build a bidirectional graph: every connection `a -> b` with value `v`
/// also records `b -> a` with value `inverter(v)`.
pub fn create_dg<V, F, I>(inverter: F, connections: I) -> Graph<V>
where
    V: Default,
    F: Fn(&V) -> V,
    I: IntoIterator<Item = Connection<V>>,
{
    let mut graph = Graph::new();
    for c in connections {
        let reverse = Edge::new(inverter(c.edge.value()));
        let left_id = c.left.id().to_string();
        let right_id = c.right.id().to_string();

        graph.associate(Some(c.left), Some(c.right), Some(c.edge));
        graph.associate(
            Some(Node::new(right_id)),
            Some(Node::new(left_id)),
            Some(reverse),
        );
    }
    graph
}

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<V> {
    connections: Vec<Connection<V>>,
}

impl<V: Default> GraphBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            connections: Vec::new(),
        }
    }

    /// Add an edge from `from` to `to` carrying `value`.
    pub fn link(&mut self, from: &str, value: V, to: &str) -> &mut Self {
        self.connections.push(Connection::link(from, value, to));
        self
    }

    /// Add a prepared connection.
    pub fn connection(&mut self, connection: Connection<V>) -> &mut Self {
        self.connections.push(connection);
        self
    }

    /// Number of connections recorded so far.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Whether no connections have been recorded.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Build a forward-only graph.
    pub fn build(self) -> Graph<V> {
        create_dag(self.connections)
    }

    /// Build a bidirectional graph, deriving reverse edges with `inverter`.
    pub fn build_invertible<F: Fn(&V) -> V>(self, inverter: F) -> Graph<V> {
        create_dg(inverter, self.connections)
    }
}

impl<V: Default> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
