use crate::core::interval::{intersects_window, is_active_today};
use crate::core::time_context::TimeContext;
use crate::models::{AbsenceRecord, ReportData};
use tracing::debug;

/// Stable split into (matching, non-matching).
pub fn partition_by_type<F>(
    records: &[AbsenceRecord],
    predicate: F,
) -> (Vec<AbsenceRecord>, Vec<AbsenceRecord>)
where
    F: Fn(&AbsenceRecord) -> bool,
{
    records.iter().cloned().partition(|r| predicate(r))
}

/// Records active today, split into (vacations, other absences).
pub fn filter_today(
    records: &[AbsenceRecord],
    ctx: &TimeContext,
) -> (Vec<AbsenceRecord>, Vec<AbsenceRecord>) {
    let today = ctx.today();
    let active: Vec<AbsenceRecord> = records
        .iter()
        .filter(|r| is_active_today(r, today))
        .cloned()
        .collect();

    partition_by_type(&active, AbsenceRecord::is_vacation)
}

/// Records overlapping next work week, split into (vacations, other absences).
/// Only meaningful on Fridays.
pub fn filter_next_week(
    records: &[AbsenceRecord],
    ctx: &TimeContext,
) -> (Vec<AbsenceRecord>, Vec<AbsenceRecord>) {
    let week = ctx.next_week_window();
    let upcoming: Vec<AbsenceRecord> = records
        .iter()
        .filter(|r| intersects_window(r, &week))
        .cloned()
        .collect();

    partition_by_type(&upcoming, AbsenceRecord::is_vacation)
}

/// Everything the formatter needs. The next-week preview is computed on
/// Fridays only; on other days those lists stay empty.
pub fn build_report_data(records: &[AbsenceRecord], ctx: &TimeContext) -> ReportData {
    let (today_vacations, today_other) = filter_today(records, ctx);
    let is_friday = ctx.is_friday();

    let (next_week_vacations, next_week_other) = if is_friday {
        filter_next_week(records, ctx)
    } else {
        (Vec::new(), Vec::new())
    };

    debug!(
        today = %ctx.today(),
        is_friday,
        today_vacations = today_vacations.len(),
        today_other = today_other.len(),
        next_week_vacations = next_week_vacations.len(),
        next_week_other = next_week_other.len(),
        "report data built"
    );

    ReportData {
        today_vacations,
        today_other,
        next_week_vacations,
        next_week_other,
        is_friday,
    }
}
