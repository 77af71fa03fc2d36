//! Rendering for CLI output
//!
//! One choke point for everything the commands print: report rows as a
//! text table or JSON, the amount and percentage formatting the report
//! views share, and status messages. JSON output is always a valid
//! document, even when a report comes back empty.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// How rows are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use 'table' or 'json'", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render rows in the selected format.
///
/// JSON always emits an array, so an empty result is `[]` rather than
/// prose a piped consumer would choke on.
pub fn print_output<T>(rows: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table if rows.is_empty() => println!("No rows."),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}

/// Render one row: a one-row table, or a single JSON object
pub fn print_single<T>(row: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new([row])),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(row)?),
    }
    Ok(())
}

/// Whole-unit amount with thousands separators, the way the source
/// dashboards displayed sales figures
pub fn fmt_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Ratio as a one-decimal percentage
pub fn fmt_pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Percentage cell with the red/green variance signal.
/// Colors only apply to table output; JSON cells stay plain.
pub fn fmt_pct_colored(ratio: f64, colorize: bool) -> String {
    let text = fmt_pct(ratio);
    if !colorize {
        return text;
    }
    if ratio < 0.0 {
        text.red().to_string()
    } else if ratio > 0.0 {
        text.green().to_string()
    } else {
        text
    }
}

/// Print a success message (respects quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.green());
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Print an info message (respects quiet mode)
pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}
