use cardfeed::config::{Config, ConfigError, ParsePolicy};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.resource.path.is_none());
    assert_eq!(config.fetch.parse_errors, ParsePolicy::Recover);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.scroll_step, 1);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cardfeed/config.toml"));
}

#[test]
fn test_default_log_file_sits_next_to_config() {
    let config = Config::default();
    assert_eq!(
        config.log_file(),
        Config::config_dir().join("cardfeed.log")
    );
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[resource]
path = "/data/items.json"

[fetch]
parse_errors = "propagate"

[ui]
tick_rate_ms = 100
scroll_step = 2

[logging]
filter = "cardfeed=debug"
file = "/tmp/cardfeed-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.resource.path, Some(PathBuf::from("/data/items.json")));
    assert_eq!(config.fetch.parse_errors, ParsePolicy::Propagate);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.scroll_step, 2);
    assert_eq!(config.logging.filter, "cardfeed=debug");
    assert_eq!(config.log_file(), PathBuf::from("/tmp/cardfeed-test.log"));
}

#[test]
fn test_partial_section_keeps_field_defaults() {
    let (_dir, path) = write_config("[ui]\nscroll_step = 3\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.scroll_step, 3);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let (_dir, path) = write_config("[fetch]\nparse_errors = \"explode\"\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\n");
    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn test_validation_rejects_tick_rate_out_of_range() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 5\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_zero_scroll_step() {
    let mut config = Config::default();
    config.ui.scroll_step = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_oversized_scroll_step() {
    let (_dir, path) = write_config("[ui]\nscroll_step = 4611686018427387904\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("scroll_step"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_accepts_max_scroll_step() {
    let (_dir, path) = write_config("[ui]\nscroll_step = 100\n");
    assert_eq!(Config::load_from(&path).unwrap().ui.scroll_step, 100);
}

#[test]
fn test_validation_rejects_blank_filter() {
    let mut config = Config::default();
    config.logging.filter = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}
