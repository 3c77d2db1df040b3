use crate::cli::parser::{Cli, Commands};
use crate::core::{Core, SystemClock, TimeContext};
use crate::envelope::Envelope;
use crate::errors::{AppError, AppResult};
use crate::sheet::CsvSource;
use crate::utils::date::parse_iso_date;
use tracing::{error, info};

/// Handle the `report` command.
///
/// In envelope mode a failure is reported only through the failure envelope
/// and the process exits 0; with `--plain` the error is returned instead.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Report {
        date,
        plain,
        weekdays_only,
    } = &cli.command
    {
        match generate(cli, date.as_deref(), *weekdays_only) {
            Ok(None) => {}
            Ok(Some(message)) => {
                if *plain {
                    println!("{}", message);
                } else {
                    println!("{}", Envelope::success(message).to_json()?);
                }
            }
            Err(e) => {
                error!(error = %e, "report generation failed");
                if *plain {
                    return Err(e);
                }
                println!("{}", Envelope::failure(&e).to_json()?);
            }
        }
    }
    Ok(())
}

/// `Ok(None)` when the run is skipped because today is a weekend day.
fn generate(cli: &Cli, date: Option<&str>, weekdays_only: bool) -> AppResult<Option<String>> {
    // 1️⃣ configuration first: nothing is read before it validates
    let settings = crate::load_config(cli)?.validate()?;

    // 2️⃣ single read of the clock
    let ctx = match date {
        Some(d) => {
            let day = parse_iso_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            TimeContext::for_date(day)
        }
        None => TimeContext::capture(&SystemClock, settings.timezone),
    };

    if weekdays_only && !ctx.is_weekday() {
        info!(today = %ctx.today(), "weekend, no report");
        return Ok(None);
    }

    // 3️⃣ fetch + aggregate + render
    let source = CsvSource::new(settings.source, settings.has_header);
    Core::generate(&source, &ctx).map(Some)
}
