use chrono::NaiveDate;

/// Closed, inclusive pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Inclusive overlap test. Both windows are expected to be well-formed.
    pub fn overlaps(&self, other: &DateWindow) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}
