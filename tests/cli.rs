//! CLI integration tests for base985161
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn base985161() -> Command {
    Command::cargo_bin("base985161").unwrap()
}

fn codepoints(bytes: &[u8]) -> Vec<u32> {
    String::from_utf8(bytes.to_vec())
        .unwrap()
        .chars()
        .map(|c| c as u32)
        .collect()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base985161()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base-985161"))
        .stdout(predicate::str::contains("enc"))
        .stdout(predicate::str::contains("dec"));
}

#[test]
fn test_version() {
    base985161()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base985161"));
}

#[test]
fn test_missing_mode_is_usage_error() {
    base985161()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_mode_is_usage_error() {
    base985161()
        .arg("encode-please")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_flags_without_mode_is_usage_error() {
    base985161().arg("--quiet").assert().code(2);
}

// ============================================================================
// Encode/Decode via stdin/stdout
// ============================================================================

#[test]
fn test_encode_empty() {
    base985161()
        .arg("enc")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\u{10000}");
}

#[test]
fn test_decode_empty() {
    base985161()
        .arg("dec")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_encode_leading_zeros() {
    let output = base985161()
        .args(["enc", "-", "-"])
        .write_stdin(vec![0u8, 0, 1])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(codepoints(&output), vec![0x10000, 0x10000, 0x10001]);
}

#[test]
fn test_encode_all_zero() {
    let output = base985161()
        .arg("enc")
        .write_stdin(vec![0u8; 3])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(codepoints(&output), vec![0x10000; 3]);
}

#[test]
fn test_roundtrip_binary() {
    let data: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();

    let encoded = base985161()
        .arg("enc")
        .write_stdin(data.clone())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base985161()
        .arg("dec")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout(data);
}

#[test]
fn test_engines_produce_same_text() {
    let long_division = base985161()
        .args(["--engine", "long-division", "enc"])
        .write_stdin("engine parity check")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base985161()
        .args(["enc", "--engine", "bigint"])
        .write_stdin("engine parity check")
        .assert()
        .success()
        .stdout(long_division);
}

#[test]
fn test_unknown_engine_is_usage_error() {
    base985161()
        .args(["--engine", "fft", "enc"])
        .write_stdin("x")
        .assert()
        .code(2);
}

// ============================================================================
// Line endings
// ============================================================================

#[test]
fn test_line_ending_flag() {
    let encoded = base985161()
        .args(["--line-ending", "enc"])
        .write_stdin("hi")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n"))
        .get_output()
        .stdout
        .clone();

    base985161()
        .args(["dec", "--line-ending"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("hi");
}

#[test]
fn test_trailing_newline_rejected_by_default() {
    let mut encoded = base985161()
        .arg("enc")
        .write_stdin("hi")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    encoded.push(b'\n');

    base985161()
        .arg("dec")
        .env("NO_COLOR", "1")
        .write_stdin(encoded)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("U+000A"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_decode_invalid_character() {
    base985161()
        .arg("dec")
        .env("NO_COLOR", "1")
        .write_stdin("\u{10001}A\u{10002}")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "invalid Base-985161 character U+0041 at position 1",
        ))
        .stderr(predicate::str::contains("U+10000 to U+100848"));
}

#[test]
fn test_decode_one_past_end() {
    base985161()
        .arg("dec")
        .env("NO_COLOR", "1")
        .write_stdin("\u{100849}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("U+100849"));
}

#[test]
fn test_decode_non_utf8() {
    base985161()
        .arg("dec")
        .write_stdin(vec![0xFFu8, 0xFE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("valid UTF-8"));
}

#[test]
fn test_file_not_found() {
    base985161()
        .args(["enc", "/nonexistent/path/file.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("input.bin");
    let encoded = dir.path().join("input.b985161");
    let decoded = dir.path().join("output.bin");

    let data = b"\x00\x00file contents \xF0\x9F\x98\x80 with leading zeros";
    fs::write(&plain, data).unwrap();

    base985161()
        .arg("enc")
        .arg(&plain)
        .arg(&encoded)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&encoded).unwrap();
    assert!(text.chars().take(2).all(|c| c == '\u{10000}'));

    base985161()
        .arg("dec")
        .arg(&encoded)
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(fs::read(&decoded).unwrap(), data);
}

#[test]
fn test_file_input_stdout_output() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("input.bin");
    fs::write(&plain, [0u8, 0, 0]).unwrap();

    base985161()
        .arg("enc")
        .arg(&plain)
        .arg("-")
        .assert()
        .success()
        .stdout("\u{10000}\u{10000}\u{10000}");
}

#[test]
fn test_failed_decode_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.b985161");
    let output = dir.path().join("out.bin");
    fs::write(&input, "\u{10001}?").unwrap();

    base985161()
        .arg("dec")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure();

    assert!(!output.exists());
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_file_line_ending() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "line_ending = true\nengine = \"bigint\"\n").unwrap();

    base985161()
        .arg("--config")
        .arg(&config)
        .arg("enc")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n"));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "radix = 10\n").unwrap();

    base985161()
        .arg("--config")
        .arg(&config)
        .arg("enc")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_missing_config_file() {
    base985161()
        .args(["--config", "/nonexistent/base985161.toml", "enc"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access config file"));
}

// ============================================================================
// Size Limits
// ============================================================================

#[test]
fn test_max_size_exceeded() {
    base985161()
        .args(["--max-size", "4", "enc"])
        .write_stdin("more than four bytes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));
}

#[test]
fn test_max_size_force() {
    base985161()
        .args(["--max-size", "4", "--force", "enc"])
        .write_stdin("more than four bytes")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Processing large input"));
}

#[test]
fn test_max_size_force_quiet() {
    base985161()
        .args(["--max-size", "4", "--force", "--quiet", "enc"])
        .write_stdin("more than four bytes")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_max_size_zero_unlimited() {
    base985161()
        .args(["--max-size", "0", "enc"])
        .write_stdin("test")
        .assert()
        .success();
}

#[test]
fn test_max_size_file() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("input.bin");
    fs::write(&plain, [1u8; 32]).unwrap();

    base985161()
        .args(["--max-size", "16", "enc"])
        .arg(&plain)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File size (32 bytes)"));
}

// ============================================================================
// NO_COLOR Support
// ============================================================================

#[test]
fn test_forced_color() {
    // Sanity check for the test below: colour is on when forced
    base985161()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .arg("dec")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\x1b["));
}

#[test]
fn test_no_color_flag() {
    base985161()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["--no-color", "dec"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid Base-985161 character U+0078"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_no_color_env() {
    base985161()
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .arg("dec")
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\x1b[").not());
}
