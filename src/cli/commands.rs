//! CLI command implementations.

use std::path::Path;

use crate::format::{ConversionTable, TableReader};
use crate::graph::Graph;
use crate::types::{CgError, CgResult};

/// Load a table file and build its graph.
pub fn load_graph(path: &Path) -> CgResult<(ConversionTable, Graph<f64>)> {
    let table = TableReader::read_from_file(path)?;
    let graph = table.to_graph()?;
    Ok((table, graph))
}

/// The shortest path between two nodes, or an error naming what is missing.
pub fn resolve_path(graph: &Graph<f64>, from: &str, to: &str) -> CgResult<Vec<String>> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(CgError::UnknownNode(id.to_string()));
        }
    }
    let path = graph.path(from, to);
    if path.is_empty() {
        return Err(CgError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(path)
}

/// Display information about a table.
pub fn cmd_info(path: &Path, json: bool) -> CgResult<()> {
    let (table, graph) = load_graph(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "invertible": table.invertible,
            "connections": table.connections.len(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Invertible: {}", table.invertible);
        println!("Connections: {}", table.connections.len());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the shortest path between two nodes.
pub fn cmd_path(path: &Path, from: &str, to: &str, json: bool) -> CgResult<()> {
    let (_, graph) = load_graph(path)?;
    let route = resolve_path(&graph, from, to)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "path": route})
        );
    } else {
        println!("{}", route.join(" -> "));
    }
    Ok(())
}

/// Print the edge values along the shortest path.
pub fn cmd_weights(path: &Path, from: &str, to: &str, json: bool) -> CgResult<()> {
    let (_, graph) = load_graph(path)?;
    let route = resolve_path(&graph, from, to)?;
    let weights = graph.weights(from, to);

    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "path": route, "weights": weights})
        );
    } else {
        for (hop, weight) in route.windows(2).zip(&weights) {
            println!("{} -> {}: {}", hop[0], hop[1], weight);
        }
    }
    Ok(())
}

/// Convert `amount` of `from` into `to` by multiplying the factors along
/// the path.
pub fn cmd_convert(
    path: &Path,
    amount: f64,
    from: &str,
    to: &str,
    json: bool,
) -> CgResult<()> {
    let (_, graph) = load_graph(path)?;
    let route = resolve_path(&graph, from, to)?;
    let factor = graph
        .fold_weights(from, to, 1.0, |acc, w| acc * *w)
        .ok_or_else(|| CgError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    let result = amount * factor;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "amount": amount,
                "from": from,
                "to": to,
                "factor": factor,
                "result": result,
                "path": route,
            })
        );
    } else {
        println!("{} {} = {} {}", amount, from, result, to);
    }
    Ok(())
}

/// List the outgoing edges of a node.
pub fn cmd_neighbors(path: &Path, node_id: &str, json: bool) -> CgResult<()> {
    let (_, graph) = load_graph(path)?;
    let node = graph
        .node(node_id)
        .ok_or_else(|| CgError::UnknownNode(node_id.to_string()))?;

    if json {
        let edges: Vec<serde_json::Value> = node
            .connected()
            .iter()
            .map(|(to, edge)| serde_json::json!({"to": to, "value": edge.value()}))
            .collect();
        println!(
            "{}",
            serde_json::json!({"id": node.id(), "edges": edges})
        );
    } else if node.degree() == 0 {
        println!("{} has no outgoing edges", node.id());
    } else {
        for (to, edge) in node.connected() {
            println!("{} -> {}: {}", node.id(), to, edge.value());
        }
    }
    Ok(())
}

/// Export the built graph as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> CgResult<()> {
    let (_, graph) = load_graph(path)?;
    let output = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    println!("{}", output);
    Ok(())
}
