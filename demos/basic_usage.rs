//! Basic build -> query -> save flow.

use convgraph::*;

fn main() -> CgResult<()> {
    // Length conversions, made bidirectional with reciprocal factors
    let mut builder = GraphBuilder::new();
    builder
        .link("m", 3.28, "ft")
        .link("ft", 12.0, "in")
        .link("in", 2.54, "cm");
    let graph = builder.build_invertible(reciprocal);

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Query: the hop sequence and the factors along it
    for (from, to) in [("m", "in"), ("cm", "ft"), ("m", "m")] {
        let path = graph.path(from, to);
        let weights = graph.weights(from, to);
        let factor = graph
            .fold_weights(from, to, 1.0, |acc, w| acc * *w)
            .unwrap_or(f64::NAN);
        println!("{} -> {}: {:?} {:?} (x{:.6})", from, to, path, weights, factor);
    }

    // Unknown nodes give empty results, never errors
    println!("m -> hr: {:?}", graph.path("m", "hr"));

    // Save the same conversions as a table and reload it
    let mut table = ConversionTable::new(true);
    table
        .push("m", 3.28, "ft")
        .push("ft", 12.0, "in")
        .push("in", 2.54, "cm");
    let path = std::env::temp_dir().join("convgraph_example.json");
    TableWriter::new(true).write_to_file(&table, &path)?;
    println!("\nSaved to {}", path.display());

    let loaded = TableReader::read_from_file(&path)?.to_graph()?;
    println!(
        "Reloaded: {} nodes, {} edges",
        loaded.node_count(),
        loaded.edge_count()
    );

    Ok(())
}
