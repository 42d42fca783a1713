//! Shortest-path and weight queries.

use super::traversal::bfs;
use super::Graph;

impl<V: Clone + Default> Graph<V> {
    /// Fewest-hop path from `from` to `to` as an ordered list of ids.
    ///
    /// Returns `[from]` when `from == to`, and an empty list when either
    /// endpoint is unknown or `to` cannot be reached. Among paths of equal
    /// length, the one found through earlier-inserted edges wins.
    pub fn path(&self, from: &str, to: &str) -> Vec<String> {
        // The first pass records, for every discovered node, the edge it was
        // discovered through (reversed: child -> parent).
        let prelude = bfs(self, from, to);
        if !prelude.reached(to) {
            return Vec::new();
        }

        match prelude.visited.len() {
            0 => return Vec::new(),
            1 | 2 => return prelude.ids(),
            _ => {}
        }

        // The parent subgraph is a tree, so walking it from `to` yields the
        // single chain back to `from`.
        let chain = bfs(&prelude.parents, to, from);
        let mut path = chain.ids();
        path.reverse();
        log::debug!(
            "path '{}' -> '{}': {} hop(s)",
            from,
            to,
            path.len().saturating_sub(1)
        );
        path
    }

    /// Edge values along [`Graph::path`], one per hop.
    ///
    /// Empty when the path has fewer than two nodes. A hop with no recorded
    /// edge contributes `V::default()`.
    pub fn weights(&self, from: &str, to: &str) -> Vec<V> {
        self.weights_along(&self.path(from, to))
    }

    fn weights_along(&self, path: &[String]) -> Vec<V> {
        path.windows(2)
            .map(|hop| {
                self.node(&hop[0])
                    .and_then(|node| node.edge_to(&hop[1]))
                    .map(|edge| edge.value().clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Fold the weights along the path from `from` to `to`.
    ///
    /// Returns `None` when there is no path. For `from == to` the result is
    /// `init` unchanged.
    ///
    /// ```
    /// use convgraph::graph::create_dag;
    /// use convgraph::graph::Connection;
    ///
    /// let graph = create_dag([
    ///     Connection::link("m", 100.0, "cm"),
    ///     Connection::link("cm", 10.0, "mm"),
    /// ]);
    /// let factor = graph.fold_weights("m", "mm", 1.0, |acc, w| acc * *w);
    /// assert_eq!(factor, Some(1000.0));
    /// ```
    pub fn fold_weights<A, F>(&self, from: &str, to: &str, init: A, f: F) -> Option<A>
    where
        F: FnMut(A, &V) -> A,
    {
        let path = self.path(from, to);
        if path.is_empty() {
            return None;
        }
        Some(self.weights_along(&path).iter().fold(init, f))
    }
}
