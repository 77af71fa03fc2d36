//! Report commands
//!
//! The two dashboard views: branch level (with targets) and cluster
//! level. Each prints the KPI headline block, the metric table and a
//! grand-total row.

pub mod helpers;
pub mod types;

use anyhow::Result;
use salescope_core::{build_report, GroupLevel, MetricRow, MetricTable, ReportFilter};

use crate::commands::Context;
use crate::output::{
    fmt_amount, fmt_pct_colored, print_info, print_output, print_warning, OutputFormat,
};
use helpers::resolve_range;
use types::{BranchRow, ClusterRow, KpiRow, ReportAction};

pub fn execute(ctx: &Context, action: ReportAction) -> Result<()> {
    match action {
        ReportAction::Branch {
            cluster,
            branch,
            category,
            from,
            to,
        } => run_view(ctx, GroupLevel::Branch, cluster, branch, category, from, to),
        ReportAction::Cluster {
            cluster,
            category,
            from,
            to,
        } => run_view(ctx, GroupLevel::Cluster, cluster, None, category, from, to),
    }
}

fn run_view(
    ctx: &Context,
    level: GroupLevel,
    cluster: Option<String>,
    branch: Option<String>,
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let calendar = ctx.calendar()?;
    let (from, to) = resolve_range(&dataset, from, to)?;

    let filter = ReportFilter {
        cluster,
        branch,
        category,
        from,
        to,
    };
    let table = build_report(&dataset, &filter, level, &calendar)?;

    if table.is_empty() {
        // JSON consumers still get a parseable document
        match ctx.format {
            OutputFormat::Json => print_output(&Vec::<KpiRow>::new(), ctx.format)?,
            OutputFormat::Table => print_warning("No data for these filters."),
        }
        return Ok(());
    }

    print_info(
        &format!("Report {} to {} ({} view)", from, to, level_name(level)),
        ctx.quiet,
    );
    print_kpis(ctx, &table)?;

    let colorize = ctx.format == OutputFormat::Table;
    match level {
        GroupLevel::Branch => {
            let mut rows: Vec<BranchRow> = table
                .rows
                .iter()
                .map(|(key, row)| branch_row(key.label(), row, colorize))
                .collect();
            rows.push(branch_row("TOTAL".to_string(), &table.totals, colorize));
            print_output(&rows, ctx.format)?;
        }
        GroupLevel::Cluster => {
            let mut rows: Vec<ClusterRow> = table
                .rows
                .iter()
                .map(|(key, row)| cluster_row(key.label(), row, colorize))
                .collect();
            rows.push(cluster_row("TOTAL".to_string(), &table.totals, colorize));
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}

fn level_name(level: GroupLevel) -> &'static str {
    match level {
        GroupLevel::Branch => "branch",
        GroupLevel::Cluster => "cluster",
    }
}

fn print_kpis(ctx: &Context, table: &MetricTable) -> Result<()> {
    let summary = table.summary();
    let mut kpis = vec![
        KpiRow {
            metric: "MTD Achieved".to_string(),
            value: fmt_amount(summary.mtd_actual),
        },
        KpiRow {
            metric: "Daily Achieved".to_string(),
            value: fmt_amount(summary.daily_achieved),
        },
        KpiRow {
            metric: "Projected Landing".to_string(),
            value: fmt_amount(summary.projected_landing),
        },
        KpiRow {
            metric: "Days Worked".to_string(),
            value: format!("{} / {}", summary.days_worked, summary.days_in_month),
        },
    ];
    if table.level == GroupLevel::Branch {
        kpis.insert(
            1,
            KpiRow {
                metric: "Monthly Target".to_string(),
                value: fmt_amount(summary.monthly_target),
            },
        );
    }
    print_output(&kpis, ctx.format)?;
    if !ctx.quiet {
        println!();
    }
    Ok(())
}

fn branch_row(group: String, row: &MetricRow, colorize: bool) -> BranchRow {
    BranchRow {
        group,
        mtd_actual: fmt_amount(row.mtd_actual),
        daily_achieved: fmt_amount(row.daily_achieved),
        monthly_target: fmt_amount(row.monthly_target),
        daily_target: fmt_amount(row.daily_target),
        mtd_target: fmt_amount(row.mtd_target),
        target_variance: fmt_pct_colored(row.target_variance, colorize),
        prior_year: fmt_amount(row.prior_year_actual),
        projected_landing: fmt_amount(row.projected_landing),
        yoy: fmt_pct_colored(row.yoy_variance, colorize),
    }
}

fn cluster_row(group: String, row: &MetricRow, colorize: bool) -> ClusterRow {
    ClusterRow {
        group,
        mtd_actual: fmt_amount(row.mtd_actual),
        daily_achieved: fmt_amount(row.daily_achieved),
        prior_year: fmt_amount(row.prior_year_actual),
        projected_landing: fmt_amount(row.projected_landing),
        yoy: fmt_pct_colored(row.yoy_variance, colorize),
    }
}
