//! Data commands
//!
//! Workbook inspection: row counts, date span and the distinct values
//! the report filters accept.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::print_output;

#[derive(Subcommand)]
pub enum DataAction {
    /// Sheet row counts and the sales date span
    Info,

    /// List distinct clusters
    Clusters,

    /// List distinct branches
    Branches,

    /// List distinct categories
    Categories,
}

/// Info row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct InfoRow {
    #[tabled(rename = "Property")]
    pub property: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// A single filter value
#[derive(Debug, Serialize, Tabled)]
pub struct ValueRow {
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn execute(ctx: &Context, action: DataAction) -> Result<()> {
    let dataset = ctx.load_dataset()?;

    match action {
        DataAction::Info => {
            let span = dataset
                .date_span()
                .map(|(min, max)| format!("{} to {}", min, max))
                .unwrap_or_else(|| "no sales rows".to_string());
            let rows = vec![
                InfoRow {
                    property: "Sales rows".to_string(),
                    value: dataset.sales.len().to_string(),
                },
                InfoRow {
                    property: "Target rows".to_string(),
                    value: dataset.targets.len().to_string(),
                },
                InfoRow {
                    property: "Prior-year rows".to_string(),
                    value: dataset.prior_sales.len().to_string(),
                },
                InfoRow {
                    property: "Sales date span".to_string(),
                    value: span,
                },
                InfoRow {
                    property: "Clusters".to_string(),
                    value: dataset.clusters().len().to_string(),
                },
                InfoRow {
                    property: "Branches".to_string(),
                    value: dataset.branches().len().to_string(),
                },
                InfoRow {
                    property: "Categories".to_string(),
                    value: dataset.categories().len().to_string(),
                },
            ];
            print_output(&rows, ctx.format)?;
        }
        DataAction::Clusters => print_values(ctx, dataset.clusters())?,
        DataAction::Branches => print_values(ctx, dataset.branches())?,
        DataAction::Categories => print_values(ctx, dataset.categories())?,
    }

    Ok(())
}

fn print_values(ctx: &Context, values: Vec<String>) -> Result<()> {
    let rows: Vec<ValueRow> = values.into_iter().map(|value| ValueRow { value }).collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}
