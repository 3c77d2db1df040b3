//! Configuration: YAML file, then `.env`/environment, then CLI flags.
//!
//! Everything is read once at process start. [`Config::validate`] turns the
//! loose values into [`Settings`], failing before any data is touched.

use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_against};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// CSV export of the absence sheet.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_has_header() -> bool {
    true
}
fn default_sheet_name() -> String {
    "Absences".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            source: None,
            has_header: default_has_header(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// Environment overrides (`TIMEZONE`, `ABSENCE_SOURCE`).
#[derive(Debug, Default, Deserialize)]
pub struct EnvOverrides {
    pub timezone: Option<String>,
    pub absence_source: Option<String>,
}

impl EnvOverrides {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        envy::from_env::<EnvOverrides>().map_err(|e| AppError::Config(e.to_string()))
    }
}

/// Validated settings handed to the rest of the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub timezone: Tz,
    pub source: PathBuf,
    pub has_header: bool,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("absence-report")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("absence-report.yml")
    }

    /// Load from `path`, or from the default location.
    ///
    /// A missing default file means defaults; a missing explicit file is an
    /// error. A relative `source` is resolved against the file's directory.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_file(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg = Self::from_yaml(&content)?;

        if let Some(src) = &cfg.source {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.source = Some(resolve_against(base, src).to_string_lossy().to_string());
        }

        debug!(path = %path.display(), "config file loaded");
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn apply_env(&mut self, env: &EnvOverrides) {
        if let Some(tz) = non_empty(&env.timezone) {
            self.timezone = tz.to_string();
        }
        if let Some(src) = non_empty(&env.absence_source) {
            self.source = Some(src.to_string());
        }
    }

    pub fn apply_cli(&mut self, source: Option<&str>, timezone: Option<&str>) {
        if let Some(src) = source {
            self.source = Some(src.to_string());
        }
        if let Some(tz) = timezone {
            self.timezone = tz.to_string();
        }
    }

    /// Names of required settings that are absent or blank.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if non_empty(&self.source).is_none() {
            missing.push("source".to_string());
        }
        if self.timezone.trim().is_empty() {
            missing.push("timezone".to_string());
        }
        missing
    }

    pub fn validate(&self) -> AppResult<Settings> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(AppError::MissingSettings(missing));
        }

        let timezone: Tz = self
            .timezone
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))?;

        let source = non_empty(&self.source)
            .map(expand_tilde)
            .ok_or_else(|| AppError::MissingSettings(vec!["source".to_string()]))?;

        Ok(Settings {
            timezone,
            source,
            has_header: self.has_header,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
