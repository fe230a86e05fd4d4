//! End-to-end tests for the `expenses` binary
//!
//! Each test runs against its own temporary data directory via the
//! `EXPENSE_TRACKER_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args([
            "add",
            "12.50",
            "Lunch at cafe",
            "--category",
            "food",
            "--date",
            "2024-01-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-01-05 - Lunch at cafe (Category: Food) - $12.50",
        ));
}

#[test]
fn list_with_empty_ledger_reports_missing_file() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starting with an empty list"))
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn list_filters_by_keyword_and_category() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "10", "Lunch", "-c", "food", "-d", "2024-01-05"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "2.50", "Bus ticket", "-c", "transportation", "-d", "2024-01-06"])
        .assert()
        .success();

    expenses(&dir)
        .args(["list", "--keyword", "bus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus ticket"))
        .stdout(predicate::str::contains("Lunch").not());

    expenses(&dir)
        .args(["list", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Bus ticket").not());
}

#[test]
fn malformed_filter_date_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["list", "--from", "01/05/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn zero_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "0", "Nothing", "-c", "others"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn absurdly_large_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "200000000000000000", "Yacht", "-c", "others"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn monthly_report_sums_per_month() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "10", "Lunch", "-c", "food", "-d", "2024-01-05"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "5", "Snack", "-c", "food", "-d", "2024-01-20"])
        .assert()
        .success();
    expenses(&dir)
        .args(["add", "7", "Cinema", "-c", "entertainment", "-d", "2024-02-01"])
        .assert()
        .success();

    expenses(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01: $15.00"))
        .stdout(predicate::str::contains("2024-02: $7.00"));
}

#[test]
fn category_report_lists_all_categories() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food: $0.00"))
        .stdout(predicate::str::contains("Transportation: $0.00"))
        .stdout(predicate::str::contains("Entertainment: $0.00"))
        .stdout(predicate::str::contains("Others: $0.00"));
}

#[test]
fn unknown_chart_kind_is_an_error() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["report", "chart", "--kind", "scatter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn recurring_process_materializes_when_due() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args([
            "recurring",
            "add",
            "30",
            "Gym",
            "--category",
            "entertainment",
            "--frequency",
            "weekly",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recurring expense added successfully!"));

    // First run: no history for the template, so it is due
    expenses(&dir)
        .args(["recurring", "process", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Materialized 1 recurring expense(s):"))
        .stdout(predicate::str::contains("2024-01-01 - Gym"));

    // Four days later: not due yet
    expenses(&dir)
        .args(["recurring", "process", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recurring expenses due."));

    // Seven days later: due again
    expenses(&dir)
        .args(["recurring", "process", "--date", "2024-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-08 - Gym"));

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01 - Gym"))
        .stdout(predicate::str::contains("2024-01-08 - Gym"));
}

#[test]
fn first_run_writes_default_config_file() {
    let dir = TempDir::new().unwrap();

    expenses(&dir).args(["config"]).assert().success();

    let config = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"currency_symbol\": \"$\""));
    assert!(config.contains("\"default_chart\": \"bar\""));
}

#[test]
fn configured_symbol_and_date_format_shape_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol":"€","date_format":"%d/%m/%Y"}"#,
    )
    .unwrap();

    expenses(&dir)
        .args(["add", "12.50", "Lunch", "-c", "food", "-d", "2024-01-05"])
        .assert()
        .success();

    expenses(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "05/01/2024 - Lunch (Category: Food) - €12.50",
        ));

    expenses(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01: €12.50"));
}

#[test]
fn ledger_file_has_stable_header() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "12.50", "Lunch", "-c", "food", "-d", "2024-01-05"])
        .assert()
        .success();

    let ledger =
        std::fs::read_to_string(dir.path().join("data").join("expenses.csv")).unwrap();
    assert!(ledger.starts_with("date,description,category,amount\n"));
    assert!(ledger.contains("2024-01-05,Lunch,Food,12.50"));
}
