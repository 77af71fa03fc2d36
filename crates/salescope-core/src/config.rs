//! Application configuration
//!
//! A single JSON file under the platform config directory holds the
//! workbook path, the weekly off-day rule and the sheet names. The
//! workbook path can be overridden per invocation: CLI flag, then the
//! `SALESCOPE_WORKBOOK` environment variable, then the config file.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::WorkingCalendar;
use crate::error::{Error, Result};
use crate::ingest::WorkbookSpec;

/// Environment variable overriding the configured workbook path
pub const WORKBOOK_ENV: &str = "SALESCOPE_WORKBOOK";

/// Persisted application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default workbook to load when no flag or env override is given
    #[serde(default)]
    pub workbook: Option<PathBuf>,

    /// Weekly off days by name ("sunday", "sat", ...)
    #[serde(default = "default_off_days")]
    pub off_days: Vec<String>,

    /// Sheet names inside the workbook
    #[serde(default)]
    pub sheets: WorkbookSpec,
}

fn default_off_days() -> Vec<String> {
    vec!["sunday".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workbook: None,
            off_days: default_off_days(),
            sheets: WorkbookSpec::default(),
        }
    }
}

impl AppConfig {
    /// Path of the config file under the platform config directory
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::config("no config directory on this platform"))?;
        Ok(dir.join("salescope").join("config.json"))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Build the working calendar from the configured off days
    pub fn calendar(&self) -> Result<WorkingCalendar> {
        let mut off_days = Vec::with_capacity(self.off_days.len());
        for name in &self.off_days {
            let day: Weekday = name
                .parse()
                .map_err(|_| Error::config(format!("invalid off day: {}", name)))?;
            off_days.push(day);
        }
        Ok(WorkingCalendar::new(off_days))
    }

    /// Resolve the workbook path: flag > env > config file
    pub fn resolve_workbook(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }
        if let Ok(env_path) = std::env::var(WORKBOOK_ENV) {
            if !env_path.is_empty() {
                return Ok(PathBuf::from(env_path));
            }
        }
        self.workbook.clone().ok_or_else(|| {
            Error::config(format!(
                "no workbook configured. Pass --workbook, set {}, or run `salescope config set workbook <path>`",
                WORKBOOK_ENV
            ))
        })
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "workbook" => Ok(self
                .workbook
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "off_days" => Ok(self.off_days.join(",")),
            "sales_sheet" => Ok(self.sheets.sales_sheet.clone()),
            "targets_sheet" => Ok(self.sheets.targets_sheet.clone()),
            "prior_sheet" => Ok(self.sheets.prior_sheet.clone()),
            _ => Err(Error::not_found(format!("config key: {}", key))),
        }
    }

    /// Set a configuration value by key. `off_days` takes a comma list.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "workbook" => self.workbook = Some(PathBuf::from(value)),
            "off_days" => {
                let days: Vec<String> = value
                    .split(',')
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .collect();
                // Validate before committing
                for day in &days {
                    day.parse::<Weekday>()
                        .map_err(|_| Error::config(format!("invalid off day: {}", day)))?;
                }
                self.off_days = days;
            }
            "sales_sheet" => self.sheets.sales_sheet = value.to_string(),
            "targets_sheet" => self.sheets.targets_sheet = value.to_string(),
            "prior_sheet" => self.sheets.prior_sheet = value.to_string(),
            _ => return Err(Error::not_found(format!("config key: {}", key))),
        }
        Ok(())
    }

    /// All (key, value) pairs, for `config show`
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["workbook", "off_days", "sales_sheet", "targets_sheet", "prior_sheet"]
            .into_iter()
            .map(|key| (key, self.get(key).unwrap_or_default()))
            .collect()
    }
}
