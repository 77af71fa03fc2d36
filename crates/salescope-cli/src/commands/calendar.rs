//! Calendar commands
//!
//! Working-day counts under the configured off-day rule.

use anyhow::Result;
use clap::Subcommand;
use salescope_core::MonthSpan;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::commands::report::helpers::parse_date;
use crate::output::print_single;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Working days in a month
    Days {
        /// Month to count (YYYY-MM)
        #[arg(long)]
        month: String,
    },

    /// Working days in an inclusive date range
    Elapsed {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
}

/// Working-day count row
#[derive(Debug, Serialize, Tabled)]
pub struct CalendarRow {
    #[tabled(rename = "Range")]
    pub range: String,
    #[tabled(rename = "Working Days")]
    pub working_days: String,
    #[tabled(rename = "Off Days")]
    pub off_days: String,
}

pub fn execute(ctx: &Context, action: CalendarAction) -> Result<()> {
    let calendar = ctx.calendar()?;
    let off_days = ctx.config.off_days.join(", ");

    let row = match action {
        CalendarAction::Days { month } => {
            let span = MonthSpan::parse(&month)?;
            CalendarRow {
                range: span.to_string(),
                working_days: calendar.days_in_month(span).to_string(),
                off_days,
            }
        }
        CalendarAction::Elapsed { from, to } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            CalendarRow {
                range: format!("{} to {}", from, to),
                working_days: calendar.working_days(from, to).to_string(),
                off_days,
            }
        }
    };

    print_single(&row, ctx.format)?;
    Ok(())
}
