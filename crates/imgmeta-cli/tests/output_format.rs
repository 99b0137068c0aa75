//! Output format validation tests.
//!
//! Tests JSON/JSONL/CSV output format correctness and required field
//! presence.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use imgmeta_test_support::SyntheticImageBuilder;
use serde_json::Value;

fn save_solid(dir: &tempfile::TempDir, name: &str) {
    let info = SyntheticImageBuilder::solid(8, 8, 40, 80, 120);
    info.image.save(dir.path().join(name)).unwrap();
}

// === JSONL Format Tests ===

#[test]
fn test_jsonl_format_single_object_per_line() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("jsonl")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Each line should be valid JSON
    for line in stdout.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed: Result<Value, _> = serde_json::from_str(line);
        assert!(
            parsed.is_ok(),
            "Each JSONL line should be valid JSON: {line}"
        );

        // Should be an object, not an array
        let value = parsed.unwrap();
        assert!(value.is_object(), "JSONL line should be an object");
    }
}

#[test]
fn test_jsonl_format_multiple_images() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");
    save_solid(&temp_dir, "b.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("jsonl")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"))
        .arg(temp_dir.path().join("b.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json_lines: Vec<_> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();

    // Should have 2 lines (one per image)
    assert_eq!(json_lines.len(), 2, "Should have one line per image");

    // Each line should be independently parseable
    for line in json_lines {
        let parsed: Value = serde_json::from_str(line).unwrap();
        assert!(parsed.is_object());
    }
}

// === JSON Array Format Tests ===

#[test]
fn test_json_format_is_array() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("json")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Should be a valid JSON array
    let parsed: Result<Value, _> = serde_json::from_str(&stdout);
    assert!(parsed.is_ok(), "JSON format should be valid JSON");

    let value = parsed.unwrap();
    assert!(value.is_array(), "JSON format should be an array");
}

#[test]
fn test_json_format_multiple_images() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");
    save_solid(&temp_dir, "b.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("json")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"))
        .arg(temp_dir.path().join("b.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    let arr = parsed.as_array().unwrap();

    assert_eq!(arr.len(), 2, "Should have one entry per image");
}

#[test]
fn test_json_format_empty_array_for_no_images() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("json")
        .arg("--quiet")
        .arg(temp_dir.path());

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 0);
}

#[test]
fn test_json_pretty_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("json")
        .arg("--pretty")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("[\n"), "Pretty JSON should be indented");
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
}

// === CSV Format Tests ===

#[test]
fn test_csv_format_header_and_rows() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");
    save_solid(&temp_dir, "b.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("csv")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"))
        .arg(temp_dir.path().join("b.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "Header plus one row per image");

    let header = lines[0];
    assert!(header.contains("path"));
    assert!(header.contains("technical_fileName"));
    assert!(header.contains("color_dominantColors"));
    assert!(
        !header.contains("histogram"),
        "Histogram bins should not become CSV columns"
    );
}

#[test]
fn test_csv_rows_carry_flattened_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("csv")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("a.png"));
    // Solid (40, 80, 120) palette entry
    assert!(lines[1].contains("#285078"));
}
