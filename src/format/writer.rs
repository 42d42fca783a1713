//! Writes conversion tables as JSON.

use std::io::Write;
use std::path::Path;

use crate::types::CgResult;

use super::ConversionTable;

/// Writer for JSON conversion tables.
pub struct TableWriter {
    pretty: bool,
}

impl TableWriter {
    /// Create a writer; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a table to a file, replacing it if it exists.
    pub fn write_to_file(&self, table: &ConversionTable, path: &Path) -> CgResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a table to any writer.
    pub fn write_to(&self, table: &ConversionTable, writer: &mut impl Write) -> CgResult<()> {
        table.validate()?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, table)?;
        } else {
            serde_json::to_writer(&mut *writer, table)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
