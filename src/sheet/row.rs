//! Sheet row → AbsenceRecord conversion.
//!
//! Columns A:F are: type, employee, start, end, working days, calendar days.
//! A row that cannot become a valid record is dropped; the rest of the sheet
//! is still processed.

use crate::models::{AbsenceRecord, AbsenceType};
use crate::utils::date::parse_sheet_date;
use thiserror::Error;
use tracing::warn;

pub const SHEET_COLUMNS: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected 6 columns, found {0}")]
    TooShort(usize),

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("unknown absence type: {0:?}")]
    UnknownType(String),

    #[error("start {start} is after end {end}")]
    InvertedInterval { start: String, end: String },
}

/// A dropped row, with its 1-based position in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: usize,
    pub reason: RowError,
}

/// Outcome of parsing a whole sheet.
#[derive(Debug, Default)]
pub struct ParsedSheet {
    pub records: Vec<AbsenceRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// Empty or non-numeric counters become 0.
fn parse_count(cell: &str) -> u32 {
    cell.trim().parse().unwrap_or(0)
}

pub fn parse_row<S: AsRef<str>>(row: &[S]) -> Result<AbsenceRecord, RowError> {
    if row.len() < SHEET_COLUMNS {
        return Err(RowError::TooShort(row.len()));
    }

    let cell = |i: usize| row[i].as_ref().trim();

    let kind_raw = cell(0);
    if kind_raw.is_empty() {
        return Err(RowError::MissingField("type"));
    }
    let employee = cell(1);
    if employee.is_empty() {
        return Err(RowError::MissingField("employee"));
    }
    if cell(2).is_empty() {
        return Err(RowError::MissingField("start"));
    }
    if cell(3).is_empty() {
        return Err(RowError::MissingField("end"));
    }

    let start = parse_sheet_date(cell(2)).ok_or_else(|| RowError::InvalidDate {
        field: "start",
        value: cell(2).to_string(),
    })?;
    let end = parse_sheet_date(cell(3)).ok_or_else(|| RowError::InvalidDate {
        field: "end",
        value: cell(3).to_string(),
    })?;

    let kind = AbsenceType::from_sheet_label(kind_raw)
        .ok_or_else(|| RowError::UnknownType(kind_raw.to_string()))?;

    AbsenceRecord::new(
        kind,
        employee,
        start,
        end,
        parse_count(cell(4)),
        parse_count(cell(5)),
    )
    .map_err(|_| RowError::InvertedInterval {
        start: cell(2).to_string(),
        end: cell(3).to_string(),
    })
}

/// Parse every row, skipping the first one when `has_header` is set.
pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>], has_header: bool) -> ParsedSheet {
    let skip = usize::from(has_header);
    let mut parsed = ParsedSheet::default();

    for (idx, row) in rows.iter().enumerate().skip(skip) {
        let line = idx + 1;
        match parse_row(row) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                warn!(line, %reason, "dropping sheet row");
                parsed.rejected.push(RejectedRow { line, reason });
            }
        }
    }

    parsed
}
