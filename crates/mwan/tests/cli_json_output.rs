//! Integration tests for `mwan status --format json`
//!
//! JSON output is the parsed snapshot, for scripting.

use std::process::Command;
use tempfile::TempDir;

fn run_status_json(dir: &TempDir, file: &std::path::Path) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_mwan"))
        .args(["status", "--format", "json", "--file"])
        .arg(file)
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute 'mwan status --format json'");

    assert!(
        output.status.success(),
        "mwan status --format json failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_json_contains_parsed_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mini-mwan.status");
    std::fs::write(
        &path,
        "mode=failover\ntimestamp=1700000000\nbuild=abc\n[wan1]\nstatus=up\nlatency=12.345\nweight=3\nfoo=bar=baz\n",
    )
    .unwrap();

    let json = run_status_json(&dir, &path);

    assert_eq!(json["mode"], "failover");
    assert_eq!(json["timestamp"], 1_700_000_000);
    assert_eq!(json["check_interval"], 30);
    assert_eq!(json["build"], "abc");

    let interfaces = json["interfaces"].as_array().unwrap();
    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces[0]["name"], "wan1");
    assert_eq!(interfaces[0]["status"], "up");
    assert_eq!(interfaces[0]["latency"], "12.345");
    assert_eq!(interfaces[0]["weight"], "3");
    assert!(interfaces[0].get("foo").is_none());
}

#[test]
fn test_json_without_interfaces_is_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mini-mwan.status");
    std::fs::write(&path, "timestamp=1700000000\n").unwrap();

    let json = run_status_json(&dir, &path);
    assert_eq!(json["interfaces"], serde_json::json!([]));
    assert_eq!(json["timestamp"], 1_700_000_000);
}

#[test]
fn test_json_global_named_interfaces_keeps_interface_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mini-mwan.status");
    std::fs::write(&path, "interfaces=legacy\n[wan]\nstatus=up\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mwan"))
        .args(["status", "--format", "json", "--file"])
        .arg(&path)
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute 'mwan status --format json'");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches(r#""interfaces":"#).count(), 1, "got: {}", stdout);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let interfaces = json["interfaces"].as_array().expect("interfaces should be a list");
    assert_eq!(interfaces[0]["name"], "wan");
    assert_eq!(interfaces[0]["status"], "up");
}

#[test]
fn test_json_for_missing_file_is_null() {
    let dir = TempDir::new().unwrap();
    let json = run_status_json(&dir, &dir.path().join("absent.status"));
    assert!(json.is_null());
}

#[test]
fn test_json_non_numeric_timestamp_is_null() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mini-mwan.status");
    std::fs::write(&path, "timestamp=pending\n[wan]\n").unwrap();

    let json = run_status_json(&dir, &path);
    assert!(json["timestamp"].is_null());
}

#[test]
fn test_json_with_watch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_mwan"))
        .args(["status", "--format", "json", "--watch"])
        .env("HOME", dir.path())
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute 'mwan status'");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be combined with --watch"));
    assert!(
        stderr.contains(r#""event":"core.app.command_failed""#),
        "failed commands should be logged even without -v, got: {}",
        stderr
    );
}
