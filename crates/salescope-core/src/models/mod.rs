//! Data models for the Salescope reporting engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sales transaction from the current-year or prior-year sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub cluster: String,
    pub branch: String,
    pub category: String,
    pub date: NaiveDate,
    pub amount: f64,
}

/// A monthly target row. Several rows may share one (branch, category)
/// key; they are summed during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRecord {
    pub branch: String,
    pub category: String,
    pub amount: f64,
}

/// The three joined tables a report is built from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub sales: Vec<SaleRecord>,
    pub targets: Vec<TargetRecord>,
    pub prior_sales: Vec<SaleRecord>,
}

impl DataSet {
    /// Distinct clusters in the current-year sales, sorted
    pub fn clusters(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.cluster.as_str()))
    }

    /// Distinct branches in the current-year sales, sorted
    pub fn branches(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.branch.as_str()))
    }

    /// Distinct categories in the current-year sales, sorted
    pub fn categories(&self) -> Vec<String> {
        Self::distinct(self.sales.iter().map(|s| s.category.as_str()))
    }

    /// Earliest and latest sale date in the current-year sheet.
    /// This is the default report range.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.sales.iter().map(|s| s.date).min()?;
        let max = self.sales.iter().map(|s| s.date).max()?;
        Some((min, max))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect();
        out.sort();
        out.dedup();
        out
    }
}

/// Which dimension the report groups on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupLevel {
    /// Group by (branch, category); targets are joined in
    Branch,
    /// Group by (cluster, category); no targets at this level
    Cluster,
}

impl GroupLevel {
    /// Dimension value for a sale record at this level
    pub fn dimension_of(&self, sale: &SaleRecord) -> String {
        match self {
            GroupLevel::Branch => sale.branch.clone(),
            GroupLevel::Cluster => sale.cluster.clone(),
        }
    }
}

/// Composite report key: (branch or cluster, category).
/// Ordered so report rows come out deterministically sorted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub dimension: String,
    pub category: String,
}

impl GroupKey {
    pub fn new(dimension: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            category: category.into(),
        }
    }

    /// Display label, e.g. "Nairobi West - Paint"
    pub fn label(&self) -> String {
        format!("{} - {}", self.dimension, self.category)
    }
}

/// Computed metrics for one group key.
///
/// Cluster-level rows carry zeroed target fields (`monthly_target`,
/// `daily_target`, `mtd_target`, `target_variance`); targets only exist
/// per branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Sum of sale amounts in the report range
    pub mtd_actual: f64,
    /// Sum of sale amounts on the last day of the range
    pub daily_achieved: f64,
    /// Monthly target for the group (branch level only)
    pub monthly_target: f64,
    /// Prior-year sales for the same calendar month
    pub prior_year_actual: f64,
    /// Monthly target prorated to one working day
    pub daily_target: f64,
    /// Daily target times working days elapsed
    pub mtd_target: f64,
    /// Run-rate projection to the end of the month
    pub projected_landing: f64,
    /// (mtd_actual - mtd_target) / mtd_target; 0 when mtd_target is 0
    pub target_variance: f64,
    /// (mtd_actual - prior_year_actual) / prior_year_actual; 0 when the
    /// prior year is 0 or negative
    pub yoy_variance: f64,
}

/// The dashboard's headline numbers, summed over a metric table
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub mtd_actual: f64,
    pub monthly_target: f64,
    pub daily_achieved: f64,
    pub projected_landing: f64,
    pub days_worked: u32,
    pub days_in_month: u32,
}
