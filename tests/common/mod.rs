//! Shared test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SINGLE_ITEM: &str = r#"[{"title":"A","body":"B"}]"#;

/// Write `contents` as `items.json` inside a fresh temp dir.
pub fn temp_resource(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("items.json");
    write_resource(&path, contents);
    (temp_dir, path)
}

pub fn write_resource(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("Failed to write resource");
}

/// JSON array with `count` items titled `item 0`, `item 1`, ...
pub fn numbered_items(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"title":"item {i}","body":"body {i}"}}"#))
        .collect();
    format!("[{}]", items.join(","))
}
