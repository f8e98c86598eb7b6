//! Integration tests for batch conversion
//!
//! Covers reading distances from files and stdin, JSON lines output and
//! failure handling with and without --continue-on-error.

use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use assert_matches::assert_matches;
use distconv::cli::batch::{convert_lines, BatchSummary};
use distconv::formatter::{OutputFormat, ResultFormatter};
use distconv::{ConversionDirection, ConverterConfig, ConverterError};
use tempfile::tempdir;

fn run_distconv(args: &[&str], stdin_data: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_distconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn distconv");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait on child")
}

fn create_test_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_batch_file_json_lines() {
    let dir = tempdir().unwrap();
    let path = create_test_file(&dir, "distances.txt", "10\n5\n");

    let output = run_distconv(
        &["--format", "json", "-d", "miles", "batch", path.to_str().unwrap()],
        "",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["display"], "10 miles = 16.0934 km");
    assert_eq!(records[1]["display"], "5 miles = 8.0467 km");
}

#[test]
fn test_batch_stdin_stops_on_invalid_line() {
    let output = run_distconv(&["batch"], "1\nabc\n2\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 2"), "stderr: {}", stderr);
    assert!(stderr.contains("--continue-on-error"), "stderr: {}", stderr);
}

#[test]
fn test_batch_continue_on_error() {
    let output = run_distconv(&["batch", "--continue-on-error"], "1\nabc\n2\n");

    // Failures are reported but every line is processed
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 km = 0.6214 miles"));
    assert!(stdout.contains("Please enter a valid positive number"));
    assert!(stdout.contains("2 km = 1.2427 miles"));
}

#[test]
fn test_batch_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = run_distconv(&["batch", missing.to_str().unwrap()], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot read"), "stderr: {}", stderr);
}

#[test]
fn test_convert_lines_library_api() {
    let config = ConverterConfig::default().with_direction(ConversionDirection::MilesToKm);
    let formatter = ResultFormatter::new(OutputFormat::Text, false);
    let mut output = Vec::new();

    let summary = convert_lines(Cursor::new("3\n\n"), &mut output, &config, &formatter).unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            converted: 1,
            failed: 0,
            skipped: 1
        }
    );
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "3 miles = 4.8280 km\n3 miles × 1.60934 = 4.8280 km\n"
    );
}

#[test]
fn test_convert_lines_reports_line_number() {
    let config = ConverterConfig::default();
    let formatter = ResultFormatter::new(OutputFormat::Text, false);
    let mut output = Vec::new();

    let result = convert_lines(Cursor::new("\n\n-1\n"), &mut output, &config, &formatter);

    assert_matches!(result, Err(ConverterError::BatchLine { line: 3, .. }));
}
