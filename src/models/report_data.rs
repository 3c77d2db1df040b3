use super::absence::AbsenceRecord;

/// Aggregated, partitioned result ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportData {
    pub today_vacations: Vec<AbsenceRecord>,
    pub today_other: Vec<AbsenceRecord>,
    pub next_week_vacations: Vec<AbsenceRecord>, // empty unless is_friday
    pub next_week_other: Vec<AbsenceRecord>,     // empty unless is_friday
    pub is_friday: bool,
}

impl ReportData {
    /// Today's absences, vacations first, for display.
    pub fn today_all(&self) -> Vec<AbsenceRecord> {
        [self.today_vacations.as_slice(), self.today_other.as_slice()].concat()
    }

    pub fn next_week_all(&self) -> Vec<AbsenceRecord> {
        [
            self.next_week_vacations.as_slice(),
            self.next_week_other.as_slice(),
        ]
        .concat()
    }
}
