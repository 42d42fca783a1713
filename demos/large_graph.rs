//! 100K node performance demo.
//!
//! Builds a ring with forward shortcuts and runs path queries over it.

use std::time::Instant;

use convgraph::*;

fn main() {
    let node_count = 100_000;
    let edges_per_node = 3;

    println!("Creating graph with {} nodes...", node_count);
    let start = Instant::now();

    let mut connections = Vec::with_capacity(node_count * edges_per_node);
    for i in 0..node_count {
        for j in 1..=edges_per_node {
            let target = (i + j * 7) % node_count;
            if target != i {
                connections.push(Connection::link(
                    format!("n{}", i),
                    1.0 + j as f64,
                    format!("n{}", target),
                ));
            }
        }
    }
    let graph = create_dg(reciprocal, connections);
    println!(
        "  Graph built in {:?} ({} nodes, {} edges)",
        start.elapsed(),
        graph.node_count(),
        graph.edge_count()
    );

    for to in ["n21", "n7000", "n50000", "n99999"] {
        let start = Instant::now();
        let path = graph.path("n0", to);
        println!(
            "  path n0 -> {}: {} hop(s) in {:?}",
            to,
            path.len().saturating_sub(1),
            start.elapsed()
        );
    }
}
