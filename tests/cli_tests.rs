//! Integration tests for the timecsv binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TWO_RUNS: &str = "\
$ time ./raytracer scenes/spheres.pov

real\t0m1.234s
user\t0m0.987s
sys\t0m0.012s
$ time ./raytracer scenes/bsp.pov
Building BSP tree... done

real\t0m0.456s
user\t0m0.321s
sys\t0m0.004s
";

fn timecsv(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("timecsv").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write_log(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("time.log");
    fs::write(&path, contents).unwrap();
    path
}

fn read_table(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("time.csv")).unwrap()
}

// ============================================================================
// Output table
// ============================================================================

#[test]
fn test_writes_time_csv_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, TWO_RUNS);

    timecsv(&dir).arg(&log).assert().success();

    assert_eq!(
        read_table(&dir),
        "real,user\n0m1.234s,0m0.987s\n0m0.456s,0m0.321s\n"
    );
}

#[test]
fn test_relative_input_path() {
    let dir = TempDir::new().unwrap();
    write_log(&dir, "real 1.00\nuser 0.50\n");

    timecsv(&dir).arg("time.log").assert().success();

    assert_eq!(read_table(&dir), "real,user\n1.00,0.50\n");
}

#[test]
fn test_no_timing_lines_gives_header_only() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "nothing to see here\nsys 0m0.001s\n");

    timecsv(&dir).arg(&log).assert().success();

    assert_eq!(read_table(&dir), "real,user\n");
}

#[test]
fn test_double_real_keeps_second_value() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "real 0m9.999s\nreal 0m1.000s\nuser 0m0.800s\n");

    timecsv(&dir).arg(&log).assert().success();

    assert_eq!(read_table(&dir), "real,user\n0m1.000s,0m0.800s\n");
}

#[test]
fn test_trailing_real_leaves_dangling_comma() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "real 1s\nuser 1s\nreal 2s\n");

    timecsv(&dir).arg(&log).assert().success();

    let table = read_table(&dir);
    assert_eq!(table, "real,user\n1s,1s\n2s,");
    assert!(!table.ends_with('\n'));
}

#[test]
fn test_rerun_overwrites_identically() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, TWO_RUNS);

    timecsv(&dir).arg(&log).assert().success();
    let first = read_table(&dir);
    timecsv(&dir).arg(&log).assert().success();
    let second = read_table(&dir);

    assert_eq!(first, second);
    assert_eq!(second.lines().count(), 3);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    timecsv(&dir)
        .arg("does-not-exist.log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.log"));

    assert!(!dir.path().join("time.csv").exists());
}

#[test]
fn test_malformed_line_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "real 1s\nuser 1s\n\nreal\n");

    timecsv(&dir)
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("time.log:4"))
        .stderr(predicate::str::contains("`real` line has no value"));

    // rows written before the bad line stay put
    assert_eq!(read_table(&dir), "real,user\n1s,1s\n");
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();

    timecsv(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_debug_flag_traces_to_stderr() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "real 1s\nuser 1s\n");

    timecsv(&dir)
        .arg("--debug")
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 rows"));
}
