//! End-to-end runs of the `salary` commands against fixture files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pretty_assertions::assert_eq;
use salary_cli::{Cli, run};

fn fixture_path(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

/// Runs the CLI and returns its result together with whatever it wrote.
fn run_cli(args: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(std::iter::once("salary").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut buf = Vec::new();
    let result = run(&cli, &mut buf);
    (result, String::from_utf8(buf).expect("output is UTF-8"))
}

fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("salary-cli-{}-{name}", std::process::id()))
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_file_replaces_rates_and_schedule() {
    let config = fixture_path("salary.toml");

    let (result, out) = run_cli(&[
        "payroll", "--basic", "200000", "--incentive", "Bonus=20000", "--config", &config,
        "--format", "csv",
    ]);

    result.unwrap();
    assert_eq!(
        out.lines().nth(1).unwrap(),
        "200000.00,20000.00,220000.00,20000.00,30000.00,10000.00,12000.00,188000.00,32000.00,40000.00"
    );
}

#[test]
fn schedule_file_overrides_config_brackets() {
    let config = fixture_path("salary.toml");
    let schedule = fixture_path("flat_schedule.csv");

    let (result, out) = run_cli(&[
        "tax", "--gross", "50000", "--config", &config, "--schedule", &schedule, "--format", "csv",
    ]);

    result.unwrap();
    assert_eq!(out, "gross_income,tax_amount\n50000.00,5000.00\n");
}

#[test]
fn schedule_command_prints_configured_brackets() {
    let config = fixture_path("salary.toml");

    let (result, out) = run_cli(&["schedule", "--config", &config, "--format", "csv"]);

    result.unwrap();
    assert_eq!(out, "lower_bound,upper_bound,rate\n0,100000,0\n100000,,0.10\n");
}

#[test]
fn schedule_file_starting_above_zero_is_rejected() {
    let schedule = fixture_path("offset_schedule.csv");

    let (result, out) = run_cli(&["tax", "--gross", "1500", "--schedule", &schedule]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("first bracket must start at 0, got 1000"));
    assert!(out.is_empty());
}

#[test]
fn invalid_rates_in_config_are_reported() {
    let config = fixture_path("bad_rates.toml");

    let (result, out) = run_cli(&["schedule", "--config", &config]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("employee rate must be between 0 and 1"));
    assert!(out.is_empty());
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn batch_writes_valid_rows_and_reports_rejections() {
    let config = fixture_path("salary.toml");
    let file = fixture_path("batch.csv");

    let (result, out) = run_cli(&["batch", "--file", &file, "--config", &config, "--format", "csv"]);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "2 of 4 rows rejected");

    let employees: Vec<&str> = out
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(employees, vec!["A1", "A2"]);
}

#[test]
fn batch_output_file_receives_results() {
    let file = fixture_path("batch.csv");
    let output = temp_output("batch.txt");
    let output_arg = output.display().to_string();

    let (result, out) = run_cli(&["batch", "--file", &file, "--output", &output_arg]);

    assert!(result.is_err());
    assert!(out.is_empty());

    let written = fs::read_to_string(&output).expect("output file should exist");
    fs::remove_file(&output).ok();
    assert!(written.starts_with("== A1 ==\n"));
    assert!(written.contains("== A2 =="));
    assert!(!written.contains("== A3 =="));
}

#[test]
fn batch_missing_file_is_error() {
    let (result, _) = run_cli(&["batch", "--file", "/no/such/batch.csv"]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to load batch file"));
}
