//! Conversion tables: the JSON description of a conversion graph.

use serde::{Deserialize, Serialize};

use crate::graph::{create_dag, create_dg, Connection, Graph};
use crate::types::{reciprocal, CgError, CgResult};

/// One directed conversion `from -> to` with a multiplicative factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Source unit id.
    pub from: String,
    /// Target unit id.
    pub to: String,
    /// Factor: one `from` equals `value` of `to`.
    pub value: f64,
}

/// A list of conversions, optionally made bidirectional by reciprocal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    /// Derive reverse edges with `1 / value`.
    #[serde(default)]
    pub invertible: bool,
    /// Conversions, associated in order.
    pub connections: Vec<TableEntry>,
}

impl ConversionTable {
    /// Create an empty table.
    pub fn new(invertible: bool) -> Self {
        Self {
            invertible,
            connections: Vec::new(),
        }
    }

    /// Append a conversion.
    pub fn push(&mut self, from: &str, value: f64, to: &str) -> &mut Self {
        self.connections.push(TableEntry {
            from: from.to_string(),
            to: to.to_string(),
            value,
        });
        self
    }

    /// Check ids are non-empty and, for invertible tables, that every
    /// factor has a finite reciprocal.
    pub fn validate(&self) -> CgResult<()> {
        for (index, entry) in self.connections.iter().enumerate() {
            if entry.from.is_empty() || entry.to.is_empty() {
                return Err(CgError::EmptyId(index));
            }
            if self.invertible && !(entry.value.is_finite() && entry.value != 0.0) {
                return Err(CgError::InvalidFactor {
                    index,
                    value: entry.value,
                });
            }
        }
        Ok(())
    }

    /// Validate and build the graph this table describes.
    pub fn to_graph(&self) -> CgResult<Graph<f64>> {
        self.validate()?;

        let connections = self
            .connections
            .iter()
            .map(|e| Connection::link(e.from.as_str(), e.value, e.to.as_str()));
        let graph = if self.invertible {
            create_dg(reciprocal, connections)
        } else {
            create_dag(connections)
        };

        log::debug!(
            "Built graph from table: {} nodes, {} edges (invertible: {})",
            graph.node_count(),
            graph.edge_count(),
            self.invertible
        );
        Ok(graph)
    }
}
