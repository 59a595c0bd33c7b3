use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "cardfeed";
const MIN_TICK_RATE_MS: u64 = 20;
const MAX_TICK_RATE_MS: u64 = 5000;
const MAX_SCROLL_STEP: usize = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the default log file.
    ///
    /// Falls back to the current directory if `dirs::config_dir()` is unavailable.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// `~/.config/cardfeed/config.toml` on Linux, the platform equivalent elsewhere.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `ui.tick_rate_ms` is within 20..=5000
    /// - `ui.scroll_step` is within 1..=100
    /// - `logging.filter` is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be between {} and {}, got {}",
                    MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
                ),
            });
        }

        let step = self.ui.scroll_step;
        if !(1..=MAX_SCROLL_STEP).contains(&step) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.scroll_step must be between 1 and {}, got {}",
                    MAX_SCROLL_STEP, step
                ),
            });
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("cardfeed.log"))
    }
}
