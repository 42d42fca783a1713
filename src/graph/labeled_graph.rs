//! Core graph structure: nodes keyed by id, each holding its outgoing edges.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::Edge;

use super::Node;

/// A directed graph of string-identified nodes with valued edges.
///
/// An edge `a -> b` lives only in `a`'s outgoing map; there is no separate
/// edge list. Every stored node is reachable through exactly one key and
/// that key equals its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph<V> {
    nodes: IndexMap<String, Node<V>>,
}

/// The `(left, edge, right)` triple returned by [`Graph::node_edge`].
#[derive(Debug)]
pub struct NodeEdge<'a, V> {
    /// The node at the left id, if known.
    pub left: Option<&'a Node<V>>,
    /// The edge from left to right, if recorded.
    pub edge: Option<&'a Edge<V>>,
    /// The node at the right id, present only when the edge is.
    pub right: Option<&'a Node<V>>,
}

impl<V> Graph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Whether a node with this id is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> Option<&Node<V>> {
        self.nodes.get(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// All node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Store `node` under its id, replacing whatever was stored there.
    ///
    /// The replaced node (and its outgoing edges) is returned.
    pub fn add_node(&mut self, node: Node<V>) -> Option<Node<V>> {
        let replaced = self.nodes.insert(node.id().to_string(), node);
        if let Some(old) = &replaced {
            if old.degree() > 0 {
                log::warn!(
                    "Replaced node '{}' and dropped {} outgoing edge(s)",
                    old.id(),
                    old.degree()
                );
            }
        }
        replaced
    }

    /// Look up the node at `left`, its edge toward `right`, and the node at
    /// `right`.
    pub fn node_edge(&self, left: &str, right: &str) -> NodeEdge<'_, V> {
        let Some(left_node) = self.node(left) else {
            return NodeEdge {
                left: None,
                edge: None,
                right: None,
            };
        };

        match left_node.edge_to(right) {
            Some(edge) => NodeEdge {
                left: Some(left_node),
                edge: Some(edge),
                right: self.node(right),
            },
            None => NodeEdge {
                left: Some(left_node),
                edge: None,
                right: None,
            },
        }
    }
}

impl<V: Default> Graph<V> {
    /// Insert or augment `left` and `right`, recording `edge` from left to
    /// right.
    ///
    /// - Both `None`: nothing happens.
    /// - Exactly one `None`: the other node is stored as by [`Graph::add_node`].
    /// - Otherwise the edge is recorded on the canonical node for `left`'s id
    ///   (the stored one if present, else `left` itself, which is inserted),
    ///   and `right` is inserted if its id is new.
    ///
    /// When a supplied node's id is already stored, the supplied node is not
    /// kept; its outgoing edges are merged into the stored node for neighbors
    /// the stored node has no edge to. The `edge` argument always replaces an
    /// existing left -> right edge.
    pub fn associate(
        &mut self,
        left: Option<Node<V>>,
        right: Option<Node<V>>,
        edge: Option<Edge<V>>,
    ) {
        let (mut left, right) = match (left, right) {
            (None, None) => return,
            (Some(node), None) | (None, Some(node)) => {
                self.add_node(node);
                return;
            }
            (Some(left), Some(right)) => (left, right),
        };

        if let Some(canonical) = self.nodes.get_mut(left.id()) {
            canonical.connect(Some(&right), edge);
            // The edge just recorded is already present, so absorbing cannot
            // overwrite it.
            canonical.absorb(left);
        } else {
            left.connect(Some(&right), edge);
            self.nodes.insert(left.id().to_string(), left);
        }

        match self.nodes.get_mut(right.id()) {
            Some(canonical) => canonical.absorb(right),
            None => {
                self.nodes.insert(right.id().to_string(), right);
            }
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
