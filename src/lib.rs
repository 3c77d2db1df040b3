//! absence-report library root.
//! Exposes the CLI parser, the high-level run() function, and the report
//! pipeline: time context → aggregation → rendering.

pub mod cli;
pub mod config;
pub mod core;
pub mod envelope;
pub mod errors;
pub mod format;
pub mod logging;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, EnvOverrides};
use errors::AppResult;
use std::path::Path;

/// Build the effective configuration: file, then environment, then flags.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;
    cfg.apply_env(&EnvOverrides::from_env()?);
    cfg.apply_cli(cli.source.as_deref(), cli.tz.as_deref());
    Ok(cfg)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Report { .. } => cli::commands::report::handle(cli),
        Commands::Check => cli::commands::check::handle(&load_config(cli)?),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &load_config(cli)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    dispatch(&cli)
}
