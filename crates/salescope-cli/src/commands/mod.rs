//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod calendar;
pub mod config;
pub mod data;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use salescope_core::{AppConfig, DataSet, WorkingCalendar};

use crate::output::OutputFormat;

/// Shared context for all commands
pub struct Context {
    pub config: AppConfig,
    /// Workbook path from the --workbook flag or env, if any
    pub workbook: Option<PathBuf>,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Load the workbook the context resolves to
    pub fn load_dataset(&self) -> Result<DataSet> {
        let path = self.config.resolve_workbook(self.workbook.as_deref())?;
        log::debug!("loading workbook {}", path.display());
        Ok(salescope_core::load_workbook(&path, &self.config.sheets)?)
    }

    /// Working calendar from the configured off-day rule
    pub fn calendar(&self) -> Result<WorkingCalendar> {
        Ok(self.config.calendar()?)
    }
}
