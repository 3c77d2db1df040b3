use super::row::{ParsedSheet, parse_rows};
use crate::errors::AppResult;
use crate::models::AbsenceRecord;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supplier of the ordered, already validated absence records.
pub trait RecordSource {
    fn fetch(&self) -> AppResult<Vec<AbsenceRecord>>;
}

/// Records held in memory.
pub struct MemorySource {
    records: Vec<AbsenceRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<AbsenceRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self) -> AppResult<Vec<AbsenceRecord>> {
        Ok(self.records.clone())
    }
}

/// CSV export of the absence sheet.
pub struct CsvSource {
    path: PathBuf,
    has_header: bool,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            path: path.into(),
            has_header,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw cells of every row, in file order.
    pub fn read_rows(&self) -> AppResult<Vec<Vec<String>>> {
        // header handling stays in parse_rows so line numbers match the file
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "sheet export read");
        Ok(rows)
    }

    /// Parse the export, keeping track of dropped rows.
    pub fn parse(&self) -> AppResult<ParsedSheet> {
        let rows = self.read_rows()?;
        Ok(parse_rows(&rows, self.has_header))
    }
}

impl RecordSource for CsvSource {
    fn fetch(&self) -> AppResult<Vec<AbsenceRecord>> {
        let parsed = self.parse()?;
        info!(
            accepted = parsed.records.len(),
            dropped = parsed.rejected.len(),
            "absence records loaded"
        );
        Ok(parsed.records)
    }
}
