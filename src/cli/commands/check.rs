use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::CsvSource;
use crate::ui::messages::{info, success, warning};

/// Handle the `check` command: run ingestion only and report what it kept.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let settings = cfg.validate()?;
    let source = CsvSource::new(&settings.source, settings.has_header);

    info(format!(
        "Reading sheet '{}' from {}",
        cfg.sheet_name,
        source.path().display()
    ));
    let parsed = source.parse()?;

    success(format!("{} rows accepted", parsed.records.len()));

    if parsed.rejected.is_empty() {
        return Ok(());
    }

    warning(format!("{} rows dropped", parsed.rejected.len()));
    for rejected in &parsed.rejected {
        println!("  line {}: {}", rejected.line, rejected.reason);
    }

    Ok(())
}
