//! Working-day calendar
//!
//! Counts business days under a configurable weekly off-day rule. The
//! same counter feeds both "days elapsed" and "days in month" so the
//! target proration numerator and denominator can never disagree on
//! what a working day is.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// A weekly-rule business calendar.
///
/// The default marks Sunday as the only off day, matching the retail
/// trading week the reports were built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCalendar {
    off_days: Vec<Weekday>,
}

impl Default for WorkingCalendar {
    fn default() -> Self {
        Self {
            off_days: vec![Weekday::Sun],
        }
    }
}

impl WorkingCalendar {
    /// Calendar with an explicit set of weekly off days
    pub fn new(off_days: Vec<Weekday>) -> Self {
        Self { off_days }
    }

    /// Calendar with no off days (every date counts)
    pub fn seven_day() -> Self {
        Self { off_days: vec![] }
    }

    pub fn off_days(&self) -> &[Weekday] {
        &self.off_days
    }

    /// Whether a date is a working day under this calendar
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.off_days.contains(&date.weekday())
    }

    /// Count working days in the inclusive range [start, end].
    /// Returns 0 when start is after end.
    pub fn working_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if start > end {
            return 0;
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }

    /// Working days from the start of the span's month through `through`,
    /// clamped to the span. Days before the month start count as zero.
    pub fn days_elapsed(&self, span: MonthSpan, through: NaiveDate) -> u32 {
        let end = through.min(span.end());
        self.working_days(span.start(), end)
    }

    /// Working days in the whole month
    pub fn days_in_month(&self, span: MonthSpan) -> u32 {
        self.working_days(span.start(), span.end())
    }
}

/// One calendar month, the unit targets are set for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    year: i32,
    month: u32,
}

impl MonthSpan {
    /// Build a span, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::validation(format!("invalid month: {}", month)));
        }
        Ok(Self { year, month })
    }

    /// The month containing a date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(Error::validation(format!(
                "invalid month format: {}. Use YYYY-MM",
                s
            )));
        }
        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| Error::validation(format!("invalid year in: {}", s)))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|_| Error::validation(format!("invalid month in: {}", s)))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month
    pub fn start(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of the month
    pub fn end(&self) -> NaiveDate {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap()
        };
        next - Duration::days(1)
    }

    /// Same month one year earlier, for year-over-year comparison
    pub fn prior_year(&self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }
}

impl std::fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
