//! Integration tests for CLI commands.

use serde_json::Value;
use std::process::Command;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_crock32"))
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn run_json(args: &[&str]) -> Value {
    let (success, stdout, stderr) = run_cli(args);
    assert!(success, "stderr: {}", stderr);
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_encode_command() {
    let (success, stdout, _) = run_cli(&["encode", "8730"]);
    assert!(success);
    assert_eq!(stdout.trim(), "8GT");
}

#[test]
fn test_encode_with_check_and_width() {
    let (success, stdout, _) = run_cli(&["encode", "90", "--check", "--width", "4"]);
    assert!(success);
    assert_eq!(stdout.trim(), "002TG");
}

#[test]
fn test_encode_json() {
    let value = run_json(&["encode", "12", "--check", "--json"]);
    assert_eq!(value["value"], 12);
    assert_eq!(value["base32"], "C");
    assert_eq!(value["check"], "C");
}

#[test]
fn test_encode_rejects_out_of_range() {
    let (success, _, _) = run_cli(&["encode", "4294967296"]);
    assert!(!success);
}

#[test]
fn test_decode_command() {
    let (success, stdout, _) = run_cli(&["decode", "00-8gt"]);
    assert!(success);
    assert_eq!(stdout.trim(), "8730");
}

#[test]
fn test_decode_overflow_fails() {
    let (success, _, stderr) = run_cli(&["decode", "4000000"]);
    assert!(!success);
    assert!(stderr.contains("too big"));
}

#[test]
fn test_decode_invalid_digit_fails() {
    let (success, _, stderr) = run_cli(&["decode", "CUT"]);
    assert!(!success);
    assert!(stderr.starts_with("Error:"));
}

#[test]
fn test_normalize_json() {
    let value = run_json(&["normalize", "00-Example-00", "--json"]);
    assert_eq!(value["base32"], "EXAMP1E00");
    assert_eq!(value["fits_u32"], false);
}

#[test]
fn test_check_command() {
    let (success, stdout, _) = run_cli(&["check", "36"]);
    assert!(success);
    assert_eq!(stdout.trim(), "U");
}

#[test]
fn test_verify_command() {
    let (success, stdout, _) = run_cli(&["verify", "8gt", "="]);
    assert!(success);
    assert_eq!(stdout.trim(), "valid");

    let (success, stdout, _) = run_cli(&["verify", "8GT", "0"]);
    assert!(success);
    assert_eq!(stdout.trim(), "invalid");
}

#[test]
fn test_verify_strict_fails_on_mismatch() {
    let (success, _, stderr) = run_cli(&["verify", "8GT", "0", "--strict"]);
    assert!(!success);
    assert!(stderr.contains("does not match"));
}

#[test]
fn test_verify_code_command() {
    let value = run_json(&["verify-code", "2t-g", "--json"]);
    assert_eq!(value["value"], 90);
    assert_eq!(value["code"], "2TG");

    let (success, _, stderr) = run_cli(&["verify-code", "2TH"]);
    assert!(!success);
    assert!(stderr.contains("does not match"));
}

#[test]
fn test_pad_and_trim_commands() {
    let (success, stdout, _) = run_cli(&["pad", "abc", "5"]);
    assert!(success);
    assert_eq!(stdout.trim(), "00ABC");

    let (success, stdout, _) = run_cli(&["trim", "00-oo-00TEST"]);
    assert!(success);
    assert_eq!(stdout.trim(), "TEST");

    let (success, _, _) = run_cli(&["trim", "--", "---"]);
    assert!(!success);
}
