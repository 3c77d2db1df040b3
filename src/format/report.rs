//! Report text rendering.
//!
//! The output is consumed by a chat bot in HTML parse mode, so header text,
//! icons, indentation and separators are part of its contract.

use crate::models::{AbsenceRecord, AbsenceType, ReportData};
use crate::utils::formatting::{bold, days_label, escape_html, italic};
use crate::utils::format_date;

const HEADER_ICON: &str = "🌴";
const HEADER_TITLE: &str = "Absence Report";
const TODAY_ICON: &str = "📅";
const TODAY_TITLE: &str = "Today";
const NEXT_WEEK_ICON: &str = "📆";
const NEXT_WEEK_TITLE: &str = "Next Week";
const EVERYONE_PRESENT: &str = "✅ Everyone is present today!";
const SECTION_SEPARATOR: &str = "\n\n";

/// Bucket records by type in display order. Empty buckets are omitted and
/// records keep their input order inside a bucket.
pub fn group_by_type(records: &[AbsenceRecord]) -> Vec<(AbsenceType, Vec<&AbsenceRecord>)> {
    AbsenceType::DISPLAY_ORDER
        .iter()
        .filter_map(|&kind| {
            let bucket: Vec<&AbsenceRecord> = records.iter().filter(|r| r.kind == kind).collect();
            (!bucket.is_empty()).then_some((kind, bucket))
        })
        .collect()
}

/// Two-line entry: bullet with the name, then the date range.
pub fn format_absence_line(record: &AbsenceRecord) -> String {
    format!(
        "    • {}\n      {} – {} ({})",
        escape_html(&record.employee),
        format_date(record.start),
        format_date(record.end),
        days_label(record.calendar_days)
    )
}

/// Title line plus one sub-block per non-empty type. Empty input yields an
/// empty string so the caller can drop the section.
pub fn format_section(title: &str, icon: &str, records: &[AbsenceRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = vec![format!("{} {}", icon, bold(title))];

    for (kind, bucket) in group_by_type(records) {
        lines.push(format!("\n{} {}", kind.icon(), italic(kind.display_label())));
        lines.extend(bucket.into_iter().map(format_absence_line));
    }

    lines.join("\n")
}

pub fn format_report(data: &ReportData) -> String {
    let mut sections = vec![format!("{} {}", HEADER_ICON, bold(HEADER_TITLE))];

    let today = format_section(TODAY_TITLE, TODAY_ICON, &data.today_all());
    if !today.is_empty() {
        sections.push(today);
    }

    if data.is_friday {
        let next_week = format_section(NEXT_WEEK_TITLE, NEXT_WEEK_ICON, &data.next_week_all());
        if !next_week.is_empty() {
            sections.push(next_week);
        }
    }

    // header only
    if sections.len() == 1 {
        sections.push(EVERYONE_PRESENT.to_string());
    }

    sections.join(SECTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn rec(kind: AbsenceType, who: &str, start: NaiveDate, end: NaiveDate, days: u32) -> AbsenceRecord {
        AbsenceRecord::new(kind, who, start, end, days, days).unwrap()
    }

    #[test]
    fn group_order_ignores_input_order() {
        let records = vec![
            rec(AbsenceType::Other, "O1", d(6, 1), d(6, 1), 1),
            rec(AbsenceType::Sick, "S1", d(6, 1), d(6, 1), 1),
            rec(AbsenceType::Other, "O2", d(6, 1), d(6, 1), 1),
            rec(AbsenceType::Vacation, "V1", d(6, 1), d(6, 1), 1),
        ];

        let groups = group_by_type(&records);
        let kinds: Vec<AbsenceType> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            [AbsenceType::Vacation, AbsenceType::Sick, AbsenceType::Other]
        );

        let others: Vec<&str> = groups[2].1.iter().map(|r| r.employee.as_str()).collect();
        assert_eq!(others, ["O1", "O2"]);
    }

    #[test]
    fn missing_types_have_no_bucket() {
        let records = vec![rec(AbsenceType::Sick, "S1", d(6, 1), d(6, 1), 1)];
        let groups = group_by_type(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, AbsenceType::Sick);
    }

    #[test]
    fn empty_section_renders_nothing() {
        assert_eq!(format_section("Today", "📅", &[]), "");
    }

    #[test]
    fn absence_line_layout() {
        let r = rec(AbsenceType::Vacation, "Alice", d(6, 9), d(6, 11), 3);
        assert_eq!(
            format_absence_line(&r),
            "    • Alice\n      09.06.2024 – 11.06.2024 (3 days)"
        );
    }

    #[test]
    fn section_layout() {
        let records = vec![
            rec(AbsenceType::Sick, "Bob", d(6, 10), d(6, 10), 1),
            rec(AbsenceType::Vacation, "Alice", d(6, 9), d(6, 11), 3),
        ];

        let expected = "📅 <b>Today</b>\n\
\n\
🏖 <i>Vacation</i>\n    • Alice\n      09.06.2024 – 11.06.2024 (3 days)\n\
\n\
🤒 <i>Sick Leave</i>\n    • Bob\n      10.06.2024 – 10.06.2024 (1 days)";

        assert_eq!(format_section("Today", "📅", &records), expected);
    }

    #[test]
    fn empty_report_is_header_and_sentinel() {
        let text = format_report(&ReportData::default());
        let segments: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(
            segments,
            ["🌴 <b>Absence Report</b>", "✅ Everyone is present today!"]
        );
    }

    #[test]
    fn next_week_is_ignored_when_not_friday() {
        let data = ReportData {
            next_week_other: vec![rec(AbsenceType::Other, "Eve", d(6, 17), d(6, 17), 1)],
            is_friday: false,
            ..ReportData::default()
        };

        let text = format_report(&data);
        assert!(!text.contains("Next Week"));
        assert!(text.ends_with("✅ Everyone is present today!"));
    }

    #[test]
    fn friday_with_only_next_week() {
        let data = ReportData {
            next_week_vacations: vec![rec(AbsenceType::Vacation, "Carol", d(6, 20), d(6, 25), 6)],
            is_friday: true,
            ..ReportData::default()
        };

        assert_eq!(
            format_report(&data),
            "🌴 <b>Absence Report</b>\n\n\
📆 <b>Next Week</b>\n\n🏖 <i>Vacation</i>\n    • Carol\n      20.06.2024 – 25.06.2024 (6 days)"
        );
    }

    #[test]
    fn friday_with_nobody_anywhere_gets_sentinel() {
        let data = ReportData {
            is_friday: true,
            ..ReportData::default()
        };
        assert!(format_report(&data).ends_with("✅ Everyone is present today!"));
    }

    #[test]
    fn today_partitions_are_merged_then_regrouped() {
        let data = ReportData {
            today_vacations: vec![rec(AbsenceType::Vacation, "Alice", d(6, 9), d(6, 11), 3)],
            today_other: vec![
                rec(AbsenceType::Other, "Olga", d(6, 10), d(6, 10), 1),
                rec(AbsenceType::Sick, "Bob", d(6, 10), d(6, 10), 1),
            ],
            ..ReportData::default()
        };

        let text = format_report(&data);
        let sick = text.find("Sick Leave").unwrap();
        let other = text.find("<i>Other</i>").unwrap();
        assert!(text.find("<i>Vacation</i>").unwrap() < sick);
        assert!(sick < other);
        assert!(!text.contains("Everyone is present"));
    }

    #[test]
    fn names_are_escaped() {
        let r = rec(AbsenceType::Other, "Tom <QA>", d(6, 10), d(6, 10), 1);
        assert!(format_absence_line(&r).contains("Tom &lt;QA&gt;"));
    }
}
