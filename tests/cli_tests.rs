//! CLI integration tests
//!
//! Drives the scribe binary directly with assert_cmd.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::write_fixture;
use predicates::prelude::*;
use tempfile::TempDir;

fn scribe() -> Command {
    Command::cargo_bin("scribe").unwrap()
}

#[test]
fn test_cli_help() {
    scribe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scribe"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_cli_version() {
    scribe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scribe"));
}

#[test]
fn test_generate_help() {
    scribe()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word (.docx)"));
}

#[test]
fn test_generate_writes_report() {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("monthly.xlsx");
    write_fixture(&workbook);
    let output = dir.path().join("report.docx");

    scribe()
        .args(["generate", "-y", "113", "-m", "5", "--strict"])
        .arg(&workbook)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    assert!(output.exists());
}

#[test]
fn test_generate_default_output_name() {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("monthly.xlsx");
    write_fixture(&workbook);

    scribe()
        .current_dir(dir.path())
        .args(["generate", "monthly.xlsx", "-y", "113", "-m", "5"])
        .assert()
        .success();

    assert!(dir.path().join("報表_113_5.docx").exists());
}

#[test]
fn test_preview_prints_filled_report() {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("monthly.xlsx");
    write_fixture(&workbook);

    scribe()
        .args(["preview", "-y", "113", "-m", "5"])
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("主旨：陳本院113年5月份"))
        .stdout(predicate::str::contains("1,234,567"));
}

#[test]
fn test_fields_lists_sources() {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("monthly.xlsx");
    write_fixture(&workbook);

    scribe()
        .args(["fields", "-y", "113", "-m", "5"])
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("主計室!B7"))
        .stdout(predicate::str::contains("(blank)"));
}

#[test]
fn test_generate_missing_workbook_fails() {
    scribe()
        .args(["generate", "no_such_file.xlsx", "-y", "113", "-m", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FileNotFound"));
}

#[test]
fn test_generate_missing_key_row_fails() {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("monthly.xlsx");
    write_fixture(&workbook);

    scribe()
        .args(["generate", "-y", "113", "-m", "6"])
        .arg(&workbook)
        .assert()
        .failure()
        .stderr(predicate::str::contains("KeyRowNotFound"));
}

#[test]
fn test_month_out_of_range_rejected() {
    scribe()
        .args(["generate", "monthly.xlsx", "-y", "113", "-m", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("13"));
}
