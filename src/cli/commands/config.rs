use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if !*print_config && !*check {
            info(format!("Default config file: {}", Config::config_file().display()));
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Effective configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            match cfg.validate() {
                Ok(settings) => {
                    success(format!(
                        "Configuration OK (timezone {}, source {})",
                        settings.timezone,
                        settings.source.display()
                    ));
                }
                Err(AppError::MissingSettings(keys)) => {
                    for key in &keys {
                        warning(format!("Missing setting: {}", key));
                    }
                    return Err(AppError::MissingSettings(keys));
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
