//! Golden tests for doctally
//!
//! These tests verify that command outputs match expected golden files.
//! Golden tests ensure:
//! - Output format stability across versions
//! - Stable document and value ordering
//! - No unexpected regressions in output structure

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Create a command for running the doctally binary
fn doctally_cmd() -> Command {
    Command::cargo_bin("doctally").expect("Failed to find doctally binary")
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

#[test]
fn golden_table_output_for_corpus() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("result.xlsx");

    let assert = doctally_cmd()
        .arg("--format")
        .arg("table")
        .arg("--no-color")
        .arg("count")
        .arg("--values-file")
        .arg(fixtures_dir().join("values.txt"))
        .arg("--output")
        .arg(&output)
        .arg(fixtures_dir().join("corpus"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let expected = fs::read_to_string(fixtures_dir().join("expected_table.txt")).unwrap();
    assert_eq!(stdout.trim_end(), expected.trim_end());
    assert!(output.exists());
}

#[test]
fn golden_jsonl_records_for_corpus() {
    let temp = tempdir().unwrap();

    let assert = doctally_cmd()
        .arg("count")
        .arg("--values-file")
        .arg(fixtures_dir().join("values.txt"))
        .arg("--output")
        .arg(temp.path().join("result.xlsx"))
        .arg(fixtures_dir().join("corpus").join("harbor_log.txt"))
        .assert()
        .success();

    let items = parse_jsonl(&String::from_utf8_lossy(&assert.get_output().stdout));
    let triples: Vec<(String, String, u64)> = items
        .iter()
        .map(|v| {
            (
                v["document"].as_str().unwrap().to_string(),
                v["value"].as_str().unwrap().to_string(),
                v["count"].as_u64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        triples,
        vec![
            ("harbor_log.txt".to_string(), "aurora".to_string(), 3),
            ("harbor_log.txt".to_string(), "fog".to_string(), 1),
            ("harbor_log.txt".to_string(), "Kestrel".to_string(), 1),
        ]
    );
    assert!(items.iter().all(|v| v["kind"] == "count"));
}

#[test]
fn golden_values_listing() {
    let assert = doctally_cmd()
        .arg("values")
        .arg("--values-file")
        .arg(fixtures_dir().join("values.txt"))
        .arg("-s")
        .arg("fog,harbor")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["fog", "harbor", "aurora", "Kestrel"]);
}
