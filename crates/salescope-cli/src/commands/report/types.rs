//! Report types
//!
//! Clap actions and display rows for the report views.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Branch-level view: metrics per (branch, category) with targets
    Branch {
        /// Restrict to one cluster
        #[arg(long)]
        cluster: Option<String>,

        /// Restrict to one branch
        #[arg(long)]
        branch: Option<String>,

        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD), defaults to the earliest sale date
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), defaults to the latest sale date
        #[arg(long)]
        to: Option<String>,
    },

    /// Cluster-level view: metrics per (cluster, category), no targets
    Cluster {
        /// Restrict to one cluster
        #[arg(long)]
        cluster: Option<String>,

        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD), defaults to the earliest sale date
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), defaults to the latest sale date
        #[arg(long)]
        to: Option<String>,
    },
}

/// One KPI headline line
#[derive(Debug, Serialize, Tabled)]
pub struct KpiRow {
    #[tabled(rename = "KPI")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Branch-level report row
#[derive(Debug, Serialize, Tabled)]
pub struct BranchRow {
    #[tabled(rename = "Branch - Category")]
    pub group: String,
    #[tabled(rename = "MTD Act.")]
    pub mtd_actual: String,
    #[tabled(rename = "Daily Achieved")]
    pub daily_achieved: String,
    #[tabled(rename = "Monthly Tgt")]
    pub monthly_target: String,
    #[tabled(rename = "Daily Tgt")]
    pub daily_target: String,
    #[tabled(rename = "MTD Tgt")]
    pub mtd_target: String,
    #[tabled(rename = "Tgt Var")]
    pub target_variance: String,
    #[tabled(rename = "PYM")]
    pub prior_year: String,
    #[tabled(rename = "Projected Landing")]
    pub projected_landing: String,
    #[tabled(rename = "CM vs PYM")]
    pub yoy: String,
}

/// Cluster-level report row
#[derive(Debug, Serialize, Tabled)]
pub struct ClusterRow {
    #[tabled(rename = "Cluster - Category")]
    pub group: String,
    #[tabled(rename = "MTD Act.")]
    pub mtd_actual: String,
    #[tabled(rename = "Daily Achieved")]
    pub daily_achieved: String,
    #[tabled(rename = "PYM")]
    pub prior_year: String,
    #[tabled(rename = "Projected Landing")]
    pub projected_landing: String,
    #[tabled(rename = "CM vs PYM")]
    pub yoy: String,
}
