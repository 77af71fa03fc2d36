//! Report helper functions
//!
//! Date parsing and range resolution shared by the report views.

use anyhow::Result;
use chrono::NaiveDate;
use salescope_core::DataSet;

/// Parse a date string into NaiveDate
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format: {}. Use YYYY-MM-DD", s))
}

/// Resolve the report range: explicit flags, defaulting to the sales
/// data's own span (the original dashboard's date-picker defaults)
pub fn resolve_range(
    dataset: &DataSet,
    from: Option<String>,
    to: Option<String>,
) -> Result<(NaiveDate, NaiveDate)> {
    let span = dataset.date_span();
    let from = match from {
        Some(s) => parse_date(&s)?,
        None => {
            span.ok_or_else(|| anyhow::anyhow!("Workbook has no sales rows; pass --from/--to"))?
                .0
        }
    };
    let to = match to {
        Some(s) => parse_date(&s)?,
        None => {
            span.ok_or_else(|| anyhow::anyhow!("Workbook has no sales rows; pass --from/--to"))?
                .1
        }
    };
    Ok((from, to))
}
