// src/sheet/mod.rs

pub mod row;
mod source;

pub use row::{ParsedSheet, RejectedRow, RowError, parse_row, parse_rows};
pub use source::{CsvSource, MemorySource, RecordSource};
