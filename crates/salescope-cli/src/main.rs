//! Salescope CLI - branch sales KPI reporting
//!
//! A command-line interface for computing period-over-period sales
//! KPIs from a three-sheet workbook: current-year sales, monthly
//! targets and prior-year sales.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use salescope_core::AppConfig;

#[derive(Parser)]
#[command(name = "salescope")]
#[command(author, version, about = "Branch sales KPI reporting CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Workbook path (or set SALESCOPE_WORKBOOK env var)
    #[arg(long, env = "SALESCOPE_WORKBOOK", global = true)]
    workbook: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate KPI reports
    Report {
        #[command(subcommand)]
        action: commands::report::types::ReportAction,
    },

    /// Working-day calendar queries
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },

    /// Inspect the workbook data
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = AppConfig::load()?;

    let ctx = commands::Context {
        config,
        workbook: cli.workbook,
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Report { action } => commands::report::execute(&ctx, action),
        Commands::Calendar { action } => commands::calendar::execute(&ctx, action),
        Commands::Data { action } => commands::data::execute(&ctx, action),
        Commands::Config { action } => commands::config::execute(&ctx, action),
    }
}
