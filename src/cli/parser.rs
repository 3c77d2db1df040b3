use clap::{Parser, Subcommand};

/// Command-line interface definition for absence-report
#[derive(Parser)]
#[command(
    name = "absence-report",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily absence report (with a next-week preview on Fridays) from a leave sheet export",
    long_about = None
)]
pub struct Cli {
    /// Use this config file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the sheet export (CSV) to read
    #[arg(global = true, long = "source", value_name = "FILE")]
    pub source: Option<String>,

    /// Override the timezone that defines "today" (IANA name)
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the absence report and print the JSON result
    Report {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,

        #[arg(long = "plain", help = "Print only the report text, without the JSON envelope")]
        plain: bool,

        #[arg(
            long = "weekdays-only",
            help = "Print nothing on Saturday and Sunday"
        )]
        weekdays_only: bool,
    },

    /// Parse the sheet export and list rows that would be dropped
    Check,

    /// Show or validate the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that every required setting is present")]
        check: bool,
    },
}
