//! Pure date predicates over absence records.

use crate::models::{AbsenceRecord, DateWindow};
use chrono::NaiveDate;

/// `start <= today <= end`, inclusive on both ends.
pub fn is_active_today(record: &AbsenceRecord, today: NaiveDate) -> bool {
    record.window().contains(today)
}

/// Inclusive interval overlap between the record and `window`.
///
/// Covers containment in either direction and partial overlap on either
/// edge:
/// - starts and ends inside the window
/// - starts before and runs into the window
/// - starts inside and ends after
/// - covers the whole window
pub fn intersects_window(record: &AbsenceRecord, window: &DateWindow) -> bool {
    record.start <= window.end && record.end >= window.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceType;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn rec(start: NaiveDate, end: NaiveDate) -> AbsenceRecord {
        AbsenceRecord::new(AbsenceType::Vacation, "Alice", start, end, 0, 0).unwrap()
    }

    #[test]
    fn active_today_includes_both_boundaries() {
        let r = rec(d(6, 9), d(6, 11));
        assert!(is_active_today(&r, d(6, 9)));
        assert!(is_active_today(&r, d(6, 10)));
        assert!(is_active_today(&r, d(6, 11)));
        assert!(!is_active_today(&r, d(6, 8)));
        assert!(!is_active_today(&r, d(6, 12)));
    }

    #[test]
    fn single_day_record_is_active_only_that_day() {
        let r = rec(d(6, 10), d(6, 10));
        assert!(is_active_today(&r, d(6, 10)));
        assert!(!is_active_today(&r, d(6, 11)));
    }

    #[test]
    fn overlap_cases_against_next_week() {
        let week = DateWindow::new(d(6, 17), d(6, 21));

        // partial overlap on the right edge
        assert!(intersects_window(&rec(d(6, 20), d(6, 25)), &week));
        // partial overlap on the left edge
        assert!(intersects_window(&rec(d(6, 12), d(6, 17)), &week));
        // inside
        assert!(intersects_window(&rec(d(6, 18), d(6, 19)), &week));
        // covers the whole week
        assert!(intersects_window(&rec(d(6, 1), d(6, 30)), &week));
        // before / after
        assert!(!intersects_window(&rec(d(6, 10), d(6, 16)), &week));
        assert!(!intersects_window(&rec(d(6, 24), d(6, 24)), &week));
    }

    #[test]
    fn overlap_is_symmetric() {
        let days: Vec<NaiveDate> = (1..=12).map(|n| d(6, n)).collect();
        for (i, &a0) in days.iter().enumerate() {
            for &a1 in &days[i..] {
                for (j, &b0) in days.iter().enumerate() {
                    for &b1 in &days[j..] {
                        let record = rec(a0, a1);
                        let window = DateWindow::new(b0, b1);
                        let swapped_record = rec(b0, b1);
                        let swapped_window = DateWindow::new(a0, a1);
                        assert_eq!(
                            intersects_window(&record, &window),
                            intersects_window(&swapped_record, &swapped_window),
                            "{a0}..{a1} vs {b0}..{b1}"
                        );
                        assert_eq!(
                            intersects_window(&record, &window),
                            window.overlaps(&record.window())
                        );
                    }
                }
            }
        }
    }
}
