//! Reads conversion tables from JSON.

use std::io::Read;
use std::path::Path;

use crate::types::CgResult;

use super::ConversionTable;

/// Reader for JSON conversion tables.
pub struct TableReader;

impl TableReader {
    /// Read a table file.
    pub fn read_from_file(path: &Path) -> CgResult<ConversionTable> {
        let file = std::fs::File::open(path)?;
        let table = Self::read_from(&mut std::io::BufReader::new(file))?;
        log::debug!(
            "Read {} connection(s) from {}",
            table.connections.len(),
            path.display()
        );
        Ok(table)
    }

    /// Read a table from any reader.
    pub fn read_from(reader: &mut impl Read) -> CgResult<ConversionTable> {
        let table: ConversionTable = serde_json::from_reader(reader)?;
        table.validate()?;
        Ok(table)
    }

    /// Parse a table from a JSON string.
    pub fn read_from_str(json: &str) -> CgResult<ConversionTable> {
        let table: ConversionTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }
}
