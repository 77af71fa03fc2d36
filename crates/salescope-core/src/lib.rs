//! # salescope-core
//!
//! Core business logic for Salescope - a business-calendar KPI
//! aggregator for multi-branch sales reporting.
//!
//! This crate provides:
//! - Working-day calendar arithmetic (`calendar` module)
//! - Data models (`models` module)
//! - Workbook ingest (`ingest` module)
//! - Grouped metric computation (`metrics` module)
//! - Application configuration (`config` module)
//! - Unified error handling (`error` module)

pub mod calendar;
pub mod config;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod models;

// Re-exports for convenience
pub use calendar::{MonthSpan, WorkingCalendar};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use ingest::{load_workbook, WorkbookSpec};
pub use metrics::{build_report, MetricTable, ReportFilter};
pub use models::{
    DataSet, GroupKey, GroupLevel, KpiSummary, MetricRow, SaleRecord, TargetRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!version().is_empty());
    }
}
