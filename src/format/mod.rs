pub mod report;

pub use report::{format_report, format_section, group_by_type};
