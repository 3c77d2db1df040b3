pub mod absence;
pub mod absence_type;
pub mod report_data;
pub mod window;

pub use absence::AbsenceRecord;
pub use absence_type::AbsenceType;
pub use report_data::ReportData;
pub use window::DateWindow;
