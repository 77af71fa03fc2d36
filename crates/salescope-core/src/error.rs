//! Unified error handling for salescope-core

use thiserror::Error;

/// Core error type for salescope-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("Sheet not found: {0}")]
    Sheet(String),

    #[error("Bad row in sheet '{sheet}' at row {row}: {reason}")]
    Row {
        sheet: String,
        row: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for salescope-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create a row error with sheet and row context
    pub fn row(sheet: impl Into<String>, row: usize, reason: impl Into<String>) -> Self {
        Error::Row {
            sheet: sheet.into(),
            row,
            reason: reason.into(),
        }
    }
}
