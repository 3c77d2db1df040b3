use chrono::NaiveDate;

/// Date format used by the sheet and by the rendered report.
pub const SHEET_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a sheet cell in DD.MM.YYYY form. Empty or malformed cells give None.
pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, SHEET_DATE_FORMAT).ok()
}

/// Parse a YYYY-MM-DD date (CLI `--date`).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(SHEET_DATE_FORMAT).to_string()
}
