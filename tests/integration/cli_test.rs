//! Integration tests for the distconv binary
//!
//! These tests run the compiled binary end to end:
//! - One-shot conversions in both directions
//! - Error reporting and exit codes
//! - JSON output
//! - Interactive sessions driven through stdin

use std::io::Write;
use std::process::{Command, Output, Stdio};

// ============================================================================
// Test Infrastructure
// ============================================================================

fn run_distconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_distconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute distconv")
}

fn run_distconv_with_stdin(args: &[&str], stdin_data: &str) -> Output {
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

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// One-shot conversion
// ============================================================================

mod convert_command {
    use super::*;

    #[test]
    fn km_to_miles_by_default() {
        let output = run_distconv(&["convert", "10"]);

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output),
            "10 km = 6.2137 miles\n10 km × 0.621371 = 6.2137 miles\n"
        );
    }

    #[test]
    fn miles_to_km_with_direction_flag() {
        let output = run_distconv(&["--direction", "miles-to-km", "convert", "5"]);

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output),
            "5 miles = 8.0467 km\n5 miles × 1.60934 = 8.0467 km\n"
        );
    }

    #[test]
    fn negative_value_fails_with_message() {
        let output = run_distconv(&["convert", "-3"]);

        assert!(!output.status.success());
        assert!(stdout_of(&output).is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Please enter a valid positive number"),
            "stderr: {}",
            stderr
        );
    }

    #[test]
    fn json_output() {
        let output = run_distconv(&["--format", "json", "convert", "0"]);

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
        assert_eq!(value["direction"], "km-to-miles");
        assert_eq!(value["display"], "0 km = 0.0000 miles");
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let output = run_distconv(&["--direction", "leagues", "convert", "1"]);

        assert!(!output.status.success());
    }
}

// ============================================================================
// Formulas and help
// ============================================================================

mod reference_output {
    use super::*;

    #[test]
    fn formulas_command_lists_both_directions() {
        let output = run_distconv(&["formulas"]);

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output),
            "Kilometers to Miles: km × 0.621371 = miles\nMiles to Kilometers: miles × 1.60934 = km\n"
        );
    }

    #[test]
    fn help_mentions_commands() {
        let output = run_distconv(&["--help"]);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        for term in ["convert", "batch", "interactive", "--direction"] {
            assert!(stdout.contains(term), "help is missing '{}': {}", term, stdout);
        }
    }
}

// ============================================================================
// Interactive session
// ============================================================================

mod interactive_session {
    use super::*;

    #[test]
    fn pending_conversion_runs_at_end_of_input() {
        let output = run_distconv_with_stdin(
            &["--quiet", "--debounce-ms", "20", "interactive"],
            "1\n10\n",
        );

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output),
            "10 km = 6.2137 miles\n10 km × 0.621371 = 6.2137 miles\n"
        );
    }

    #[test]
    fn explicit_convert_and_formulas() {
        let output = run_distconv_with_stdin(
            &["--quiet", "interactive"],
            "5\n:miles\n:go\n:formulas\n:quit\n",
        );

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output),
            "5 miles = 8.0467 km\n5 miles × 1.60934 = 8.0467 km\n\
             Kilometers to Miles: km × 0.621371 = miles\n\
             Miles to Kilometers: miles × 1.60934 = km\n"
        );
    }
}
