//! Basic CLI E2E tests.
//!
//! Tests run the built binary with HOME pointed at a temporary directory so
//! the user's real configuration is never touched.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_goalhabit"))
        .args(args)
        .env("HOME", home)
        // nothing listens on port 1, so any request fails fast
        .env("GOALHABIT_API_URL", "http://127.0.0.1:1/")
        .env_remove("GOALHABIT_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["--help"]);
    assert_eq!(code, 0);
    for cmd in ["auth", "habits", "goals", "steps", "friends", "remind"] {
        assert!(stdout.contains(cmd), "missing {cmd} in help: {stdout}");
    }
}

#[test]
fn test_config_defaults_written() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "reminder.hour"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "20");
    assert!(home.path().join(".config/goalhabit/config.toml").exists());
}

#[test]
fn test_config_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "reminder.hour", "7"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "reminder.hour"]);
    assert_eq!(stdout.trim(), "7");

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "reminder.hour", "25"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, _, code) = run_cli(home.path(), &["config", "get", "reminder.volume"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_list_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["api"]["base_url"], "http://localhost:8000/");
}

#[test]
fn test_quant_goal_without_target_fails_before_network() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["goals", "create", "Run", "--type", "quant"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("target"), "stderr: {stderr}");
    assert!(!stderr.contains("Network error"), "stderr: {stderr}");
}

#[test]
fn test_invalid_cadence_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["habits", "create", "Read", "--cadence", "week:0"]);
    assert_eq!(code, 2);
}

#[test]
fn test_unreachable_server_reports_error() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["templates", "list"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_remind_next_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["remind", "next", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["enabled"], true);
    assert!(parsed["next"].as_str().unwrap().ends_with("T20:00:00"));
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("goalhabit"));
}
