//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! Every test runs with HOME and the working directory pointed at an empty
//! temporary directory so no real config file is picked up.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SNAPSHOT: &str = "\
mode=failover
timestamp=1700000000
check_interval=10

[wan]
device=eth1
status=up
status_since=1699990000
last_check=1699999995
latency=12.346
gateway=192.0.2.1
ping_target=1.1.1.1

[wwan]
device=wwan0
status=no_gateway
";

fn write_snapshot(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("mini-mwan.status");
    std::fs::write(&path, content).expect("Failed to write snapshot");
    path
}

/// Execute 'mwan <args>' in an isolated environment and verify it succeeds
fn run_mwan(home: &Path, args: &[&str]) -> std::process::Output {
    let output = Command::new(env!("CARGO_BIN_EXE_mwan"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .expect("Failed to execute 'mwan'");

    assert!(
        output.status.success(),
        "mwan {:?} failed with exit code {:?}. stderr: {}",
        args,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

#[test]
fn test_status_renders_dashboard() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(
        dir.path(),
        &["status", "--utc", "--file", path.to_str().unwrap()],
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Mini-MWAN Status\n"), "got: {}", stdout);
    assert!(stdout.contains("Failover (Primary/Backup)"));
    assert!(stdout.contains("10 seconds"));
    assert!(stdout.contains("2023-11-14 22:13:20"));
    assert!(stdout.contains("● UP"));
    assert!(stdout.contains("⚠ No Gateway"));
    assert!(stdout.contains("12.35 ms"));
    assert!(stdout.contains("Status updates automatically every 5 seconds"));
}

#[test]
fn test_status_rows_follow_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(dir.path(), &["status", "--file", path.to_str().unwrap()]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let wan = stdout.find("│ wan ").expect("wan row missing");
    let wwan = stdout.find("│ wwan ").expect("wwan row missing");
    assert!(wan < wwan);
}

#[test]
fn test_status_output_has_no_ansi_when_piped() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(dir.path(), &["status", "--file", path.to_str().unwrap()]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1B'), "piped output contains escapes");
}

#[test]
fn test_missing_file_shows_empty_panel() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.status");
    let output = run_mwan(dir.path(), &["status", "--file", missing.to_str().unwrap()]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No status information available"));
    assert!(stdout.contains("/etc/init.d/mini-mwan status"));
    assert!(!stdout.contains("Interface Status"));
}

#[test]
fn test_snapshot_without_interfaces_shows_empty_panel() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, "mode=failover\ntimestamp=1700000000\n");
    let output = run_mwan(dir.path(), &["status", "--file", path.to_str().unwrap()]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No status information available"));
}

#[test]
fn test_html_format() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(
        dir.path(),
        &["status", "--format", "html", "--file", path.to_str().unwrap()],
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(r#"<div class="cbi-map">"#));
    assert!(stdout.contains(r#"<code>192.0.2.1</code>"#));
}

#[test]
fn test_project_config_sets_path_and_translations() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let config_dir = dir.path().join(".mini-mwan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "[status]\npath = {:?}\n\n[refresh]\ninterval_secs = 7\n\n[translations]\n\"Mini-MWAN Status\" = \"Estado de Mini-MWAN\"\n",
            path.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run_mwan(dir.path(), &["status"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Estado de Mini-MWAN\n"), "got: {}", stdout);
    assert!(stdout.contains("● UP"));
    assert!(stdout.contains("every 7 seconds"));
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let config_dir = dir.path().join(".mini-mwan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[refresh\n").unwrap();

    let output = run_mwan(dir.path(), &["status", "--file", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: Could not load config"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("● UP"));
}

// =============================================================================
// Logging behavior
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(dir.path(), &["status", "--file", path.to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that verbose mode emits JSON logs on stderr and keeps stdout clean
#[test]
fn test_verbose_mode_emits_json_logs_on_stderr() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, SNAPSHOT);
    let output = run_mwan(
        dir.path(),
        &["-v", "status", "--file", path.to_str().unwrap()],
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""event":"cli.status_started""#),
        "Verbose mode should log the command start, got: {}",
        stderr
    );

    assert!(
        stderr.contains(r#""event":"core.dashboard.snapshot_loaded""#),
        "Verbose mode should log the loaded snapshot, got: {}",
        stderr
    );
    assert!(stderr.contains(r#""mode":"failover""#));

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(
            !line.trim().starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
    }
}
