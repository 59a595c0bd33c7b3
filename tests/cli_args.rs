//! Runs the built binary in headless `--dump` mode.

mod common;

use common::{numbered_items, temp_resource, SINGLE_ITEM};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Command pointed at a config path that does not exist, so the user's own
/// config never leaks into a test.
fn cardfeed_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cardfeed"));
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_options() {
    let config_dir = TempDir::new().unwrap();
    let output = cardfeed_cmd(&config_dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--resource"));
    assert!(stdout.contains("--dump"));
}

#[test]
fn test_dump_prints_serialized_items() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_resource(SINGLE_ITEM);

    let output = cardfeed_cmd(&config_dir)
        .arg("--resource")
        .arg(&path)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![r#"{"title":"A","body":"B"}"#]);
}

#[test]
fn test_dump_preserves_order() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_resource(&numbered_items(3));

    let output = cardfeed_cmd(&config_dir)
        .arg("--resource")
        .arg(&path)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["title"], format!("item {i}"));
    }
}

#[test]
fn test_dump_bundled_resource() {
    let config_dir = TempDir::new().unwrap();
    let output = cardfeed_cmd(&config_dir)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(!stdout_lines(&output).is_empty());
}

#[test]
fn test_dump_missing_resource_exits_with_error() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("missing.json");

    let output = cardfeed_cmd(&config_dir)
        .arg("--resource")
        .arg(&missing)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to load resource"));
}

#[test]
fn test_resource_from_config_file() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_resource(&numbered_items(2));
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[resource]\npath = {:?}\n", path.display().to_string()),
    )
    .unwrap();

    let output = cardfeed_cmd(&config_dir)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 2);
}

#[test]
fn test_propagate_policy_reports_parse_error() {
    let config_dir = TempDir::new().unwrap();
    let (_dir, path) = temp_resource("not json");
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[fetch]\nparse_errors = \"propagate\"\n",
    )
    .unwrap();

    let output = cardfeed_cmd(&config_dir)
        .arg("--resource")
        .arg(&path)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a JSON array of objects"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "[ui]\nscroll_step = 0\n").unwrap();

    let output = cardfeed_cmd(&config_dir)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
