//! Workbook ingest
//!
//! Reads the three report sheets (current-year sales, monthly targets,
//! prior-year sales) from an xlsx workbook into a typed `DataSet`.
//! Headers are matched case-insensitively. Amounts written as text have
//! thousands separators stripped. A row with a blank dimension or an
//! unparseable date/amount fails the load with sheet and row context;
//! silently coercing bad cells to zero would corrupt every ratio
//! downstream.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use chrono::NaiveDate;
use log::info;

use crate::error::{Error, Result};
use crate::models::{DataSet, SaleRecord, TargetRecord};

const COL_CLUSTER: &str = "cluster";
const COL_BRANCH: &str = "branch";
const COL_CATEGORY: &str = "category1";
const COL_DATE: &str = "date";
const COL_AMOUNT: &str = "amount";

/// Sheet names a report workbook is expected to carry
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkbookSpec {
    pub sales_sheet: String,
    pub targets_sheet: String,
    pub prior_sheet: String,
}

impl Default for WorkbookSpec {
    fn default() -> Self {
        Self {
            sales_sheet: "CY".to_string(),
            targets_sheet: "TARGETS".to_string(),
            prior_sheet: "PY".to_string(),
        }
    }
}

/// Load a workbook from disk into a `DataSet`
pub fn load_workbook(path: impl AsRef<Path>, spec: &WorkbookSpec) -> Result<DataSet> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sales = read_sales_sheet(&mut workbook, &spec.sales_sheet)?;
    let prior_sales = read_sales_sheet(&mut workbook, &spec.prior_sheet)?;
    let targets = read_targets_sheet(&mut workbook, &spec.targets_sheet)?;

    info!(
        "loaded {}: {} sales, {} targets, {} prior-year rows",
        path.display(),
        sales.len(),
        targets.len(),
        prior_sales.len()
    );

    Ok(DataSet {
        sales,
        targets,
        prior_sales,
    })
}

fn sheet_range<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<Data>> {
    if !workbook.sheet_names().iter().any(|s| s == name) {
        return Err(Error::Sheet(name.to_string()));
    }
    Ok(workbook.worksheet_range(name)?)
}

fn read_sales_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Vec<SaleRecord>> {
    let range = sheet_range(workbook, name)?;
    let mut rows = range.rows().enumerate();

    let header = match rows.next() {
        Some((_, header)) => column_map(header),
        None => return Ok(Vec::new()),
    };
    let cluster_col = require_column(&header, name, COL_CLUSTER)?;
    let branch_col = require_column(&header, name, COL_BRANCH)?;
    let category_col = require_column(&header, name, COL_CATEGORY)?;
    let date_col = require_column(&header, name, COL_DATE)?;
    let amount_col = require_column(&header, name, COL_AMOUNT)?;

    let mut records = Vec::new();
    for (idx, row) in rows {
        if is_blank_row(row) {
            continue;
        }
        // 1-based, matching what a spreadsheet shows
        let row_no = idx + 1;
        records.push(SaleRecord {
            cluster: require_string(row, cluster_col, name, row_no, COL_CLUSTER)?,
            branch: require_string(row, branch_col, name, row_no, COL_BRANCH)?,
            category: require_string(row, category_col, name, row_no, COL_CATEGORY)?,
            date: require_date(row, date_col, name, row_no)?,
            amount: require_amount(row, amount_col, name, row_no)?,
        });
    }
    Ok(records)
}

fn read_targets_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Vec<TargetRecord>> {
    let range = sheet_range(workbook, name)?;
    let mut rows = range.rows().enumerate();

    let header = match rows.next() {
        Some((_, header)) => column_map(header),
        None => return Ok(Vec::new()),
    };
    let branch_col = require_column(&header, name, COL_BRANCH)?;
    let category_col = require_column(&header, name, COL_CATEGORY)?;
    let amount_col = require_column(&header, name, COL_AMOUNT)?;

    let mut records = Vec::new();
    for (idx, row) in rows {
        if is_blank_row(row) {
            continue;
        }
        let row_no = idx + 1;
        records.push(TargetRecord {
            branch: require_string(row, branch_col, name, row_no, COL_BRANCH)?,
            category: require_string(row, category_col, name, row_no, COL_CATEGORY)?,
            amount: require_amount(row, amount_col, name, row_no)?,
        });
    }
    Ok(records)
}

/// Map lowercased, trimmed header names to column indices
fn column_map(header: &[Data]) -> HashMap<String, usize> {
    header
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| {
            cell_string(cell).map(|name| (name.trim().to_lowercase(), idx))
        })
        .collect()
}

fn require_column(header: &HashMap<String, usize>, sheet: &str, column: &str) -> Result<usize> {
    header
        .get(column)
        .copied()
        .ok_or_else(|| Error::validation(format!("sheet '{}' has no '{}' column", sheet, column)))
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

fn cell_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

fn require_string(
    row: &[Data],
    col: usize,
    sheet: &str,
    row_no: usize,
    column: &str,
) -> Result<String> {
    row.get(col)
        .and_then(cell_string)
        .ok_or_else(|| Error::row(sheet, row_no, format!("missing '{}'", column)))
}

/// Amount cells: numeric as-is, text after stripping thousands separators
fn parse_amount(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

fn require_amount(row: &[Data], col: usize, sheet: &str, row_no: usize) -> Result<f64> {
    row.get(col)
        .and_then(parse_amount)
        .ok_or_else(|| Error::row(sheet, row_no, format!("unparseable '{}'", COL_AMOUNT)))
}

/// Date cells: Excel datetime cells, or ISO `YYYY-MM-DD` text
fn parse_date_cell(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => s.trim().parse::<NaiveDate>().ok(),
        _ => cell.as_date(),
    }
}

fn require_date(row: &[Data], col: usize, sheet: &str, row_no: usize) -> Result<NaiveDate> {
    row.get(col)
        .and_then(parse_date_cell)
        .ok_or_else(|| Error::row(sheet, row_no, format!("unparseable '{}'", COL_DATE)))
}
