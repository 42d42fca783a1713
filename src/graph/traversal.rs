//! Graph traversal (BFS) with parent tracking.

use std::collections::{HashSet, VecDeque};

use super::{Graph, Node};

/// Output of a breadth-first search.
#[derive(Debug)]
pub struct Prelude<'a, V> {
    /// Nodes of the searched graph in the order they were dequeued.
    pub visited: Vec<&'a Node<V>>,
    /// Parent subgraph: every discovered node has one outgoing edge, pointing
    /// at the node it was discovered from, carrying the edge value that was
    /// followed.
    pub parents: Graph<V>,
}

impl<V> Prelude<'_, V> {
    /// Whether the search dequeued the node with this id.
    pub fn reached(&self, id: &str) -> bool {
        self.visited.last().is_some_and(|node| node.id() == id)
    }

    /// Visited ids in dequeue order.
    pub fn ids(&self) -> Vec<String> {
        self.visited.iter().map(|node| node.id().to_string()).collect()
    }
}

/// Breadth-first search from `start`, stopping once `end` is dequeued.
///
/// Neighbors are enumerated in insertion order. A node is enqueued at most
/// once, so the returned parent subgraph is a tree rooted at `start`. If
/// `end` is unreachable the queue drains and `visited` holds everything
/// reachable from `start`. If either endpoint is unknown, `visited` is empty
/// and the subgraph holds only a lone `start` node.
pub fn bfs<'a, V: Clone + Default>(graph: &'a Graph<V>, start: &str, end: &str) -> Prelude<'a, V> {
    let mut parents: Graph<V> = Graph::new();
    parents.add_node(Node::new(start));

    let Some(start_node) = graph.node(start) else {
        log::debug!("bfs: start node '{}' not in graph", start);
        return Prelude {
            visited: Vec::new(),
            parents,
        };
    };
    if !graph.contains(end) {
        log::debug!("bfs: end node '{}' not in graph", end);
        return Prelude {
            visited: Vec::new(),
            parents,
        };
    }

    let mut visited: Vec<&Node<V>> = Vec::new();
    let mut discovered: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&Node<V>> = VecDeque::new();

    discovered.insert(start_node.id());
    queue.push_back(start_node);

    while let Some(head) = queue.pop_front() {
        visited.push(head);

        for neighbor_id in head.neighbors() {
            if discovered.contains(neighbor_id) {
                continue;
            }

            let step = graph.node_edge(head.id(), neighbor_id);
            let (Some(edge), Some(child)) = (step.edge, step.right) else {
                log::trace!(
                    "bfs: edge '{}' -> '{}' points outside the graph",
                    head.id(),
                    neighbor_id
                );
                continue;
            };

            discovered.insert(child.id());
            queue.push_back(child);
            parents.associate(
                Some(Node::new(child.id())),
                Some(Node::new(head.id())),
                Some(edge.clone()),
            );
        }

        if head.id() == end {
            break;
        }
    }

    log::trace!(
        "bfs: '{}' -> '{}' visited {} node(s)",
        start,
        end,
        visited.len()
    );

    Prelude { visited, parents }
}
