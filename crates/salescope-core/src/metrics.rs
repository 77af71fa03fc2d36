//! Grouped metric table
//!
//! The report core: filter current-year sales by dimension and date
//! range, aggregate by (branch|cluster, category), merge in monthly
//! targets and prior-year actuals, then derive working-day-prorated
//! targets, run-rate projections and variance ratios.
//!
//! Every ratio is guarded: a zero denominator yields 0, never a panic
//! or an infinity.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;

use crate::calendar::{MonthSpan, WorkingCalendar};
use crate::error::{Error, Result};
use crate::models::{DataSet, GroupKey, GroupLevel, KpiSummary, MetricRow, SaleRecord};

/// Dimension and date-range selection for a report.
/// `None` means "All" for each dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub cluster: Option<String>,
    pub branch: Option<String>,
    pub category: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportFilter {
    /// Filter covering a date range with no dimension selection
    pub fn for_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            cluster: None,
            branch: None,
            category: None,
            from,
            to,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(Error::validation(format!(
                "start date {} is after end date {}",
                self.from, self.to
            )));
        }
        Ok(())
    }

    fn matches(&self, sale: &SaleRecord, level: GroupLevel) -> bool {
        if let Some(cluster) = &self.cluster {
            if &sale.cluster != cluster {
                return false;
            }
        }
        // Branch selection only applies to the branch-level view
        if level == GroupLevel::Branch {
            if let Some(branch) = &self.branch {
                if &sale.branch != branch {
                    return false;
                }
            }
        }
        if let Some(category) = &self.category {
            if &sale.category != category {
                return false;
            }
        }
        sale.date >= self.from && sale.date <= self.to
    }
}

/// A computed report: one `MetricRow` per group key plus a grand total
#[derive(Debug, Clone)]
pub struct MetricTable {
    pub level: GroupLevel,
    /// The month of the report's end date; targets and projections are
    /// relative to it
    pub span: MonthSpan,
    /// Working days from the 1st of the month through the end date
    pub days_elapsed: u32,
    /// Working days in the whole month
    pub days_in_month: u32,
    /// Rows sorted by group key
    pub rows: Vec<(GroupKey, MetricRow)>,
    /// Grand total: additive columns summed, ratios recomputed from the
    /// summed inputs
    pub totals: MetricRow,
}

impl MetricTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Headline KPI numbers over the whole table
    pub fn summary(&self) -> KpiSummary {
        KpiSummary {
            mtd_actual: self.totals.mtd_actual,
            monthly_target: self.totals.monthly_target,
            daily_achieved: self.totals.daily_achieved,
            projected_landing: self.totals.projected_landing,
            days_worked: self.days_elapsed,
            days_in_month: self.days_in_month,
        }
    }
}

/// Build the grouped metric table for a dataset under a filter.
///
/// Missing joins (a group with sales but no target, or no prior-year
/// history) default to zero rather than dropping the row.
pub fn build_report(
    dataset: &DataSet,
    filter: &ReportFilter,
    level: GroupLevel,
    calendar: &WorkingCalendar,
) -> Result<MetricTable> {
    filter.validate()?;

    let span = MonthSpan::containing(filter.to);
    let days_elapsed = calendar.days_elapsed(span, filter.to);
    let days_in_month = calendar.days_in_month(span);

    // Group-and-sum the filtered current-year sales
    let mut mtd: HashMap<GroupKey, f64> = HashMap::new();
    let mut daily: HashMap<GroupKey, f64> = HashMap::new();
    for sale in dataset.sales.iter().filter(|s| filter.matches(s, level)) {
        let key = GroupKey::new(level.dimension_of(sale), sale.category.clone());
        *mtd.entry(key.clone()).or_insert(0.0) += sale.amount;
        if sale.date == filter.to {
            *daily.entry(key).or_insert(0.0) += sale.amount;
        }
    }

    // Prior-year actuals: the same calendar month, one year back, whole
    // month regardless of how far the current range has run
    let prior_span = span.prior_year();
    let mut prior: HashMap<GroupKey, f64> = HashMap::new();
    for sale in &dataset.prior_sales {
        if sale.date >= prior_span.start() && sale.date <= prior_span.end() {
            let key = GroupKey::new(level.dimension_of(sale), sale.category.clone());
            *prior.entry(key).or_insert(0.0) += sale.amount;
        }
    }

    // Monthly targets are set per (branch, category); they only join at
    // branch level
    let mut targets: HashMap<GroupKey, f64> = HashMap::new();
    if level == GroupLevel::Branch {
        for target in &dataset.targets {
            let key = GroupKey::new(target.branch.clone(), target.category.clone());
            *targets.entry(key).or_insert(0.0) += target.amount;
        }
    }

    let mut keys: Vec<GroupKey> = mtd.keys().cloned().collect();
    keys.sort();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let mtd_actual = mtd[&key];
        let row = derive_row(
            mtd_actual,
            daily.get(&key).copied().unwrap_or(0.0),
            targets.get(&key).copied().unwrap_or(0.0),
            prior.get(&key).copied().unwrap_or(0.0),
            days_elapsed,
            days_in_month,
        );
        rows.push((key, row));
    }

    let totals = derive_row(
        rows.iter().map(|(_, r)| r.mtd_actual).sum(),
        rows.iter().map(|(_, r)| r.daily_achieved).sum(),
        rows.iter().map(|(_, r)| r.monthly_target).sum(),
        rows.iter().map(|(_, r)| r.prior_year_actual).sum(),
        days_elapsed,
        days_in_month,
    );

    debug!(
        "built {:?}-level report: {} rows, {}/{} working days in {}",
        level,
        rows.len(),
        days_elapsed,
        days_in_month,
        span
    );

    Ok(MetricTable {
        level,
        span,
        days_elapsed,
        days_in_month,
        rows,
        totals,
    })
}

/// Fill in the derived columns from the four additive inputs
fn derive_row(
    mtd_actual: f64,
    daily_achieved: f64,
    monthly_target: f64,
    prior_year_actual: f64,
    days_elapsed: u32,
    days_in_month: u32,
) -> MetricRow {
    let daily_target = safe_div(monthly_target, days_in_month as f64);
    let mtd_target = daily_target * days_elapsed as f64;
    let projected_landing = safe_div(mtd_actual, days_elapsed as f64) * days_in_month as f64;
    let target_variance = safe_div(mtd_actual - mtd_target, mtd_target);
    // Year-over-year keeps the original strict-positive guard: a zero or
    // negative prior year reads as "no comparison", not a ratio
    let yoy_variance = if prior_year_actual > 0.0 {
        (mtd_actual - prior_year_actual) / prior_year_actual
    } else {
        0.0
    };

    MetricRow {
        mtd_actual,
        daily_achieved,
        monthly_target,
        prior_year_actual,
        daily_target,
        mtd_target,
        projected_landing,
        target_variance,
        yoy_variance,
    }
}

/// Ratio with the standardized zero guard: 0 when the denominator is 0
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
