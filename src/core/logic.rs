use crate::core::aggregate::build_report_data;
use crate::core::time_context::TimeContext;
use crate::errors::AppResult;
use crate::format::report::format_report;
use crate::models::AbsenceRecord;
use crate::sheet::RecordSource;
use tracing::info;

pub struct Core;

impl Core {
    /// Aggregate and render in one step.
    pub fn build_report(records: &[AbsenceRecord], ctx: &TimeContext) -> String {
        let data = build_report_data(records, ctx);
        format_report(&data)
    }

    /// Full pipeline: fetch records, then aggregate and render for `ctx`.
    pub fn generate(source: &dyn RecordSource, ctx: &TimeContext) -> AppResult<String> {
        let records = source.fetch()?;
        info!(
            records = records.len(),
            today = %ctx.today(),
            "generating absence report"
        );
        Ok(Self::build_report(&records, ctx))
    }
}
