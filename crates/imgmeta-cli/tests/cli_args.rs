//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use imgmeta_test_support::SyntheticImageBuilder;
use predicates::prelude::*;

fn save_solid(dir: &tempfile::TempDir, name: &str) {
    let info = SyntheticImageBuilder::solid(8, 8, 40, 80, 120);
    info.image.save(dir.path().join(name)).unwrap();
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    // No path argument at all - error goes to stderr
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No paths specified"));
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    // The CLI warns about nonexistent paths but continues (graceful degradation)
    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("/nonexistent/path/to/image.png");

    // Should succeed (exit 0) but warn
    cmd.assert()
        .code(0) // No images processed = nothing skipped
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--quiet").arg(temp_dir.path());

    // Empty directory should succeed with no output (exit 0)
    cmd.assert().code(predicate::eq(0));
}

#[test]
fn test_unsupported_file_warns() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg(temp_dir.path().join("notes.txt"));

    cmd.assert()
        .code(0)
        .stderr(predicate::str::contains("Unsupported file type"));
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--format")
        .arg("xml") // Invalid format
        .arg(temp_dir.path().join("a.png"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}

#[test]
fn test_valid_formats_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    for format in ["jsonl", "json", "csv"] {
        let mut cmd = Command::cargo_bin("imgmeta").unwrap();
        cmd.arg("--format")
            .arg(format)
            .arg("--quiet")
            .arg(temp_dir.path().join("a.png"));

        cmd.assert().code(0);
    }
}

// === Palette Size Validation Tests ===

#[test]
fn test_palette_size_zero_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--palette-size")
        .arg("0")
        .arg(temp_dir.path().join("a.png"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0 is not at least 1"));
}

#[test]
fn test_palette_size_not_a_number_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--palette-size")
        .arg("many")
        .arg(temp_dir.path().join("a.png"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_palette_size_valid_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--palette-size")
        .arg("5")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));

    cmd.assert().code(0);
}

// === Subcommand Form ===

#[test]
fn test_inspect_subcommand_matches_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut default_cmd = Command::cargo_bin("imgmeta").unwrap();
    default_cmd
        .arg("--format")
        .arg("jsonl")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));
    let default_out = default_cmd.output().unwrap();

    let mut sub_cmd = Command::cargo_bin("imgmeta").unwrap();
    sub_cmd
        .arg("inspect")
        .arg("--format")
        .arg("jsonl")
        .arg("--quiet")
        .arg(temp_dir.path().join("a.png"));
    let sub_out = sub_cmd.output().unwrap();

    assert_eq!(default_out.status.code(), sub_out.status.code());

    // Reports differ only in timestamp
    let strip = |bytes: &[u8]| {
        let mut v: serde_json::Value =
            serde_json::from_str(String::from_utf8_lossy(bytes).trim()).unwrap();
        v.as_object_mut().unwrap().remove("timestamp");
        v
    };
    assert_eq!(strip(&default_out.stdout), strip(&sub_out.stdout));
}

// === Quiet Mode ===

#[test]
fn test_quiet_suppresses_progress_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    save_solid(&temp_dir, "a.png");

    let mut cmd = Command::cargo_bin("imgmeta").unwrap();
    cmd.arg("--quiet").arg(temp_dir.path().join("a.png"));

    let output = cmd.output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("distinct sampled"),
        "per-item status should be suppressed: {stderr}"
    );
}
