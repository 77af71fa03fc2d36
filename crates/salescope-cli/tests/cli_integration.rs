//! Integration tests for salescope-cli
//!
//! These tests verify the CLI commands work end-to-end against a
//! generated fixture workbook.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Get a Command for the salescope binary with a clean environment
fn salescope() -> Command {
    let mut cmd = Command::cargo_bin("salescope").unwrap();
    cmd.env_remove("SALESCOPE_WORKBOOK");
    cmd
}

/// Write the standard fixture workbook into a tempdir
fn fixture() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.xlsx");
    let mut workbook = Workbook::new();

    let cy = workbook.add_worksheet();
    cy.set_name("CY").unwrap();
    for (col, header) in ["Cluster", "branch", "category1", "date", "amount"]
        .iter()
        .enumerate()
    {
        cy.write_string(0, col as u16, *header).unwrap();
    }
    let sales = [
        ("West", "Westlands", "Paint", "2025-03-03", 100.0),
        ("West", "Westlands", "Paint", "2025-03-12", 50.0),
        ("East", "Embakasi", "Paint", "2025-03-10", 1200.0),
        ("East", "Embakasi", "Accessories", "2025-03-11", 75.5),
    ];
    for (row, (cluster, branch, category, date, amount)) in sales.iter().enumerate() {
        let row = (row + 1) as u32;
        cy.write_string(row, 0, *cluster).unwrap();
        cy.write_string(row, 1, *branch).unwrap();
        cy.write_string(row, 2, *category).unwrap();
        cy.write_string(row, 3, *date).unwrap();
        cy.write_number(row, 4, *amount).unwrap();
    }

    let targets = workbook.add_worksheet();
    targets.set_name("TARGETS").unwrap();
    for (col, header) in ["branch", "category1", "amount"].iter().enumerate() {
        targets.write_string(0, col as u16, *header).unwrap();
    }
    targets.write_string(1, 0, "Westlands").unwrap();
    targets.write_string(1, 1, "Paint").unwrap();
    targets.write_number(1, 2, 2600.0).unwrap();

    let py = workbook.add_worksheet();
    py.set_name("PY").unwrap();
    for (col, header) in ["cluster", "branch", "category1", "date", "amount"]
        .iter()
        .enumerate()
    {
        py.write_string(0, col as u16, *header).unwrap();
    }
    py.write_string(1, 0, "West").unwrap();
    py.write_string(1, 1, "Westlands").unwrap();
    py.write_string(1, 2, "Paint").unwrap();
    py.write_string(1, 3, "2024-03-20").unwrap();
    py.write_number(1, 4, 120.0).unwrap();

    workbook.save(&path).unwrap();
    (dir, path.to_string_lossy().into_owned())
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_cli_help() {
    salescope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("salescope"))
        .stdout(predicate::str::contains("Commands"));
}

#[test]
fn test_cli_version() {
    salescope()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salescope"));
}

// =============================================================================
// Report Command Tests
// =============================================================================

#[test]
fn test_report_branch_view() {
    let (_dir, path) = fixture();
    salescope()
        .args(["report", "branch", "--workbook", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Westlands - Paint"))
        .stdout(predicate::str::contains("Embakasi - Paint"))
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains("MTD Achieved"))
        .stdout(predicate::str::contains("Monthly Target"));
}

#[test]
fn test_report_cluster_view_has_no_targets() {
    let (_dir, path) = fixture();
    salescope()
        .args(["report", "cluster", "--workbook", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("West - Paint"))
        .stdout(predicate::str::contains("East - Accessories"))
        .stdout(predicate::str::contains("Monthly Tgt").not());
}

#[test]
fn test_report_category_filter() {
    let (_dir, path) = fixture();
    salescope()
        .args([
            "report",
            "branch",
            "--workbook",
            &path,
            "--category",
            "Accessories",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Embakasi - Accessories"))
        .stdout(predicate::str::contains("Westlands - Paint").not());
}

#[test]
fn test_report_empty_filters_warns() {
    let (_dir, path) = fixture();
    salescope()
        .args([
            "report",
            "branch",
            "--workbook",
            &path,
            "--cluster",
            "North",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for these filters."));
}

#[test]
fn test_report_empty_filters_json_is_parseable() {
    let (_dir, path) = fixture();
    let output = salescope()
        .args([
            "report",
            "branch",
            "--workbook",
            &path,
            "--cluster",
            "North",
            "--format",
            "json",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data").not())
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_report_json_output() {
    let (_dir, path) = fixture();
    salescope()
        .args(["report", "branch", "--workbook", &path, "--format", "json", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"group\""))
        .stdout(predicate::str::contains("Westlands - Paint"));
}

#[test]
fn test_report_explicit_range() {
    let (_dir, path) = fixture();
    // Only the first Westlands sale falls in this range
    salescope()
        .args([
            "report",
            "branch",
            "--workbook",
            &path,
            "--from",
            "2025-03-01",
            "--to",
            "2025-03-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Westlands - Paint"))
        .stdout(predicate::str::contains("Embakasi").not());
}

#[test]
fn test_report_invalid_date_fails() {
    let (_dir, path) = fixture();
    salescope()
        .args(["report", "branch", "--workbook", &path, "--from", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_report_missing_workbook_fails() {
    salescope()
        .args(["report", "branch", "--workbook", "/nonexistent/sales.xlsx"])
        .assert()
        .failure();
}

// =============================================================================
// Calendar Command Tests
// =============================================================================

#[test]
fn test_calendar_days() {
    // March 2025: 31 days, 5 Sundays
    salescope()
        .args(["calendar", "days", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03"))
        .stdout(predicate::str::contains("26"));
}

#[test]
fn test_calendar_elapsed() {
    salescope()
        .args([
            "calendar",
            "elapsed",
            "--from",
            "2025-03-01",
            "--to",
            "2025-03-12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_calendar_invalid_month_fails() {
    salescope()
        .args(["calendar", "days", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid month"));
}

// =============================================================================
// Data Command Tests
// =============================================================================

#[test]
fn test_data_info() {
    let (_dir, path) = fixture();
    salescope()
        .args(["data", "info", "--workbook", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales rows"))
        .stdout(predicate::str::contains("2025-03-03 to 2025-03-12"));
}

#[test]
fn test_data_branches() {
    let (_dir, path) = fixture();
    salescope()
        .args(["data", "branches", "--workbook", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Embakasi"))
        .stdout(predicate::str::contains("Westlands"));
}

#[test]
fn test_data_clusters_json() {
    let (_dir, path) = fixture();
    salescope()
        .args(["data", "clusters", "--workbook", &path, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("East"))
        .stdout(predicate::str::contains("West"));
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_show() {
    salescope()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("off_days"))
        .stdout(predicate::str::contains("sales_sheet"));
}

#[test]
fn test_config_path() {
    salescope()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
