//! The edge value carrier.

use serde::Serialize;

/// A directed, single-valued label from one node to another.
///
/// The value is fixed at construction. Replacing an edge means connecting
/// a new one under the same neighbor id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Edge<V> {
    value: V,
}

impl<V> Edge<V> {
    /// Create an edge carrying `value`.
    pub fn new(value: V) -> Self {
        Self { value }
    }

    /// The value carried by this edge.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the edge, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> From<V> for Edge<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}
