use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resource: ResourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the feed JSON comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// JSON file to read instead of the bundled fixture.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// What a fetch does with content that was read but could not be decoded.
    #[serde(default)]
    pub parse_errors: ParsePolicy,
}

/// Handling of malformed JSON and items missing `title`/`body`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Show the error view, same as an unreadable resource.
    #[default]
    Recover,
    /// Return the error to the caller; only I/O failures show the error view.
    Propagate,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Cards moved per Up/Down key press (default: 1).
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file for the interactive UI. Defaults to `cardfeed.log` next to the config file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_scroll_step() -> usize {
    1
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            scroll_step: default_scroll_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
