//! Runs the compiled binary. Only paths that exit before the terminal is
//! taken over are exercised here.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Command pointed at an empty config file inside `temp_dir`.
fn counter_cmd(temp_dir: &TempDir) -> Command {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_counter-app"));
    cmd.arg("--config").arg(path);
    cmd
}

#[test]
fn test_help_lists_range_options() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd(&temp_dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--min"));
    assert!(stdout.contains("--max"));
    assert!(stdout.contains("Upper bound of the counter"));
}

#[test]
fn test_version_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd(&temp_dir)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_inverted_range_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd(&temp_dir)
        .args(["--min", "5", "--max", "2"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("min (5) must not exceed max (2)"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_count_outside_range_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd(&temp_dir)
        .args(["--max", "3", "--count", "7"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("count 7 is outside the range [0, 3]"));
}

#[test]
fn test_missing_value_is_rejected_by_clap() {
    let temp_dir = TempDir::new().unwrap();
    let output = counter_cmd(&temp_dir)
        .arg("--max")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a value is required") || stderr.contains("requires a value"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_counter-app"))
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read config file"),
        "unexpected stderr: {stderr}"
    );
}
