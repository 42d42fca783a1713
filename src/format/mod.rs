//! JSON conversion table I/O.

pub mod reader;
pub mod table;
pub mod writer;

pub use reader::TableReader;
pub use table::{ConversionTable, TableEntry};
pub use writer::TableWriter;
