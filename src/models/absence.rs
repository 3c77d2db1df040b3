use super::{absence_type::AbsenceType, window::DateWindow};
use crate::errors::{AppError, AppResult};
use crate::utils::date::format_date;
use chrono::NaiveDate;

/// One employee's leave entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceRecord {
    pub kind: AbsenceType,  // ⇔ sheet column A
    pub employee: String,   // ⇔ sheet column B
    pub start: NaiveDate,   // ⇔ sheet column C (DD.MM.YYYY)
    pub end: NaiveDate,     // ⇔ sheet column D (DD.MM.YYYY)
    pub working_days: u32,  // ⇔ sheet column E, informational
    pub calendar_days: u32, // ⇔ sheet column F, shown in the report
}

impl AbsenceRecord {
    /// Build a record, refusing inverted intervals.
    pub fn new(
        kind: AbsenceType,
        employee: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        working_days: u32,
        calendar_days: u32,
    ) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidDate(format!(
                "start {} is after end {}",
                format_date(start),
                format_date(end)
            )));
        }

        Ok(Self {
            kind,
            employee: employee.into(),
            start,
            end,
            working_days,
            calendar_days,
        })
    }

    /// The record's own closed interval.
    pub fn window(&self) -> DateWindow {
        DateWindow {
            start: self.start,
            end: self.end,
        }
    }

    pub fn is_vacation(&self) -> bool {
        self.kind.is_vacation()
    }
}
