//! Integration test for the workbook-to-report pipeline
//!
//! Builds a real xlsx fixture, loads it through ingest, and checks the
//! computed metric table end to end.

use rust_xlsxwriter::Workbook;
use salescope_core::{build_report, load_workbook, GroupLevel, ReportFilter, WorkbookSpec, WorkingCalendar};
use tempfile::TempDir;

/// Write a three-sheet fixture workbook and return its path
fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("sales.xlsx");
    let mut workbook = Workbook::new();

    let cy = workbook.add_worksheet();
    cy.set_name("CY").expect("sheet name");
    for (col, header) in ["Cluster", "branch", "category1", "date", "amount"]
        .iter()
        .enumerate()
    {
        cy.write_string(0, col as u16, *header).expect("header");
    }
    let sales = [
        ("West", "Westlands", "Paint", "2025-03-03", "100"),
        ("West", "Westlands", "Paint", "2025-03-12", "50"),
        // Amount with a thousands separator, as the source system exports them
        ("East", "Embakasi", "Paint", "2025-03-10", "1,200"),
        ("East", "Embakasi", "Accessories", "2025-03-11", "75.5"),
    ];
    for (row, (cluster, branch, category, date, amount)) in sales.iter().enumerate() {
        let row = (row + 1) as u32;
        cy.write_string(row, 0, *cluster).expect("cell");
        cy.write_string(row, 1, *branch).expect("cell");
        cy.write_string(row, 2, *category).expect("cell");
        cy.write_string(row, 3, *date).expect("cell");
        cy.write_string(row, 4, *amount).expect("cell");
    }

    let targets = workbook.add_worksheet();
    targets.set_name("TARGETS").expect("sheet name");
    for (col, header) in ["branch", "category1", "amount"].iter().enumerate() {
        targets.write_string(0, col as u16, *header).expect("header");
    }
    // Two rows for the same key; they must be summed
    let target_rows = [
        ("Westlands", "Paint", 2000.0),
        ("Westlands", "Paint", 600.0),
        ("Embakasi", "Paint", 1300.0),
    ];
    for (row, (branch, category, amount)) in target_rows.iter().enumerate() {
        let row = (row + 1) as u32;
        targets.write_string(row, 0, *branch).expect("cell");
        targets.write_string(row, 1, *category).expect("cell");
        targets.write_number(row, 2, *amount).expect("cell");
    }

    let py = workbook.add_worksheet();
    py.set_name("PY").expect("sheet name");
    for (col, header) in ["cluster", "branch", "category1", "date", "amount"]
        .iter()
        .enumerate()
    {
        py.write_string(0, col as u16, *header).expect("header");
    }
    py.write_string(1, 0, "West").expect("cell");
    py.write_string(1, 1, "Westlands").expect("cell");
    py.write_string(1, 2, "Paint").expect("cell");
    py.write_string(1, 3, "2024-03-20").expect("cell");
    py.write_number(1, 4, 120.0).expect("cell");

    workbook.save(&path).expect("save fixture workbook");
    path
}

#[test]
fn test_workbook_to_branch_report() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir);

    let dataset = load_workbook(&path, &WorkbookSpec::default()).expect("load workbook");
    assert_eq!(dataset.sales.len(), 4);
    assert_eq!(dataset.targets.len(), 3);
    assert_eq!(dataset.prior_sales.len(), 1);

    let (from, to) = dataset.date_span().expect("date span");
    assert_eq!(from.to_string(), "2025-03-03");
    assert_eq!(to.to_string(), "2025-03-12");

    let table = build_report(
        &dataset,
        &ReportFilter::for_range(from, to),
        GroupLevel::Branch,
        &WorkingCalendar::default(),
    )
    .expect("build report");

    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.days_in_month, 26);

    // Comma-separated amount parsed, duplicate target rows summed
    let embakasi_paint = table
        .rows
        .iter()
        .find(|(k, _)| k.label() == "Embakasi - Paint")
        .expect("row")
        .1;
    assert_eq!(embakasi_paint.mtd_actual, 1200.0);
    assert_eq!(embakasi_paint.monthly_target, 1300.0);

    let westlands_paint = table
        .rows
        .iter()
        .find(|(k, _)| k.label() == "Westlands - Paint")
        .expect("row")
        .1;
    assert_eq!(westlands_paint.monthly_target, 2600.0);
    assert_eq!(westlands_paint.prior_year_actual, 120.0);

    let summary = table.summary();
    assert_eq!(summary.mtd_actual, 1425.5);
    assert_eq!(summary.monthly_target, 3900.0);
}

#[test]
fn test_workbook_to_cluster_report() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir);

    let dataset = load_workbook(&path, &WorkbookSpec::default()).expect("load workbook");
    let (from, to) = dataset.date_span().expect("date span");

    let table = build_report(
        &dataset,
        &ReportFilter::for_range(from, to),
        GroupLevel::Cluster,
        &WorkingCalendar::default(),
    )
    .expect("build report");

    // (East, Accessories), (East, Paint), (West, Paint)
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows.iter().all(|(_, r)| r.monthly_target == 0.0));
    assert_eq!(table.totals.mtd_actual, 1425.5);
}

#[test]
fn test_missing_sheet_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir);

    let spec = WorkbookSpec {
        sales_sheet: "NOPE".to_string(),
        ..Default::default()
    };
    let err = load_workbook(&path, &spec).expect_err("missing sheet");
    assert!(err.to_string().contains("NOPE"));
}

#[test]
fn test_bad_row_carries_context() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.xlsx");

    let mut workbook = Workbook::new();
    let cy = workbook.add_worksheet();
    cy.set_name("CY").expect("sheet name");
    for (col, header) in ["cluster", "branch", "category1", "date", "amount"]
        .iter()
        .enumerate()
    {
        cy.write_string(0, col as u16, *header).expect("header");
    }
    cy.write_string(1, 0, "West").expect("cell");
    cy.write_string(1, 1, "Westlands").expect("cell");
    cy.write_string(1, 2, "Paint").expect("cell");
    cy.write_string(1, 3, "not-a-date").expect("cell");
    cy.write_number(1, 4, 10.0).expect("cell");
    workbook.add_worksheet().set_name("TARGETS").expect("sheet name");
    workbook.add_worksheet().set_name("PY").expect("sheet name");
    workbook.save(&path).expect("save fixture workbook");

    let err = load_workbook(&path, &WorkbookSpec::default()).expect_err("bad date");
    let msg = err.to_string();
    assert!(msg.contains("CY"));
    // 1-based spreadsheet numbering: header is row 1, bad row is row 2
    assert!(msg.contains("row 2"));
    assert!(msg.contains("date"));
}
