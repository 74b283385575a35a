//! CLI integration tests for the tokgen binary
//!
//! These tests verify end-to-end behavior of the CLI by running the binary
//! against fixture files and checking exit codes and output: 0 for success,
//! 1 for a decode error, 2 for invalid arguments.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the tokgen binary
fn tokgen_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tokgen"))
}

/// Test that a valid spec generates both platform files with exit code 0
#[test]
fn test_generate_valid_spec_succeeds() {
    let output_dir = tempfile::tempdir().unwrap();

    let output = Command::new(tokgen_binary())
        .arg("generate")
        .arg("tests/fixtures/full.json")
        .arg("-o")
        .arg(format!("{}/", output_dir.path().display()))
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let swift_path = output_dir.path().join("DesignTokens.swift");
    let kotlin_path = output_dir.path().join("DesignTokens.kt");
    assert!(swift_path.exists(), "DesignTokens.swift not written");
    assert!(kotlin_path.exists(), "DesignTokens.kt not written");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DesignTokens.swift"));
    assert!(stdout.contains("DesignTokens.kt"));

    let swift = std::fs::read_to_string(&swift_path).unwrap();
    assert!(swift.contains("static let brandBlue = Color(hex: \"#1A73E8\")"));
}

/// Test --platform swift writes exactly one file at an explicit path
#[test]
fn test_generate_single_platform_explicit_file() {
    let output_dir = tempfile::tempdir().unwrap();
    let output_path = output_dir.path().join("Theme.swift");

    let output = Command::new(tokgen_binary())
        .arg("generate")
        .arg("tests/fixtures/minimal.json")
        .arg("--platform")
        .arg("swift")
        .arg("-o")
        .arg(&output_path)
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(0));
    assert!(output_path.exists());
    assert!(!output_dir.path().join("DesignTokens.kt").exists());
}

/// Test that a spec failing to decode exits with code 1 and no output
#[test]
fn test_generate_malformed_spec_exits_1() {
    let output_dir = tempfile::tempdir().unwrap();

    let output = Command::new(tokgen_binary())
        .arg("generate")
        .arg("tests/fixtures/invalid.json")
        .arg("-o")
        .arg(format!("{}/", output_dir.path().display()))
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid token spec"), "stderr: {}", stderr);

    // Decode errors abort generation entirely; nothing is written.
    assert!(!output_dir.path().join("DesignTokens.swift").exists());
    assert!(!output_dir.path().join("DesignTokens.kt").exists());
}

/// Test that a missing input file exits with code 2
#[test]
fn test_generate_missing_input_exits_2() {
    let output = Command::new(tokgen_binary())
        .arg("generate")
        .arg("tests/fixtures/does_not_exist.json")
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot open input file"), "stderr: {}", stderr);
}

/// Test check on a valid spec reports categories with exit code 0
#[test]
fn test_check_valid_spec() {
    let output = Command::new(tokgen_binary())
        .arg("check")
        .arg("tests/fixtures/full.json")
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK: 5 token categories, 2 components"), "stdout: {}", stdout);
}

/// Test check on a malformed spec exits with code 1
#[test]
fn test_check_malformed_spec_exits_1() {
    let output = Command::new(tokgen_binary())
        .arg("check")
        .arg("tests/fixtures/invalid.json")
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid token spec"));
}

/// Test check on a missing input file exits with code 2
#[test]
fn test_check_missing_input_exits_2() {
    let output = Command::new(tokgen_binary())
        .arg("check")
        .arg("tests/fixtures/does_not_exist.json")
        .output()
        .expect("Failed to execute tokgen");

    assert_eq!(output.status.code(), Some(2));
}
