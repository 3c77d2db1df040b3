//! Tracing setup. Logs go to stderr; stdout carries only the report result.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ABSENCE_REPORT_LOG";

/// Filter from `ABSENCE_REPORT_LOG`, else `info` (`debug` when verbose).
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    })
}

pub fn init(verbose: bool) {
    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
