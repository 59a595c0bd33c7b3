use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines go.
pub enum LogTarget<'a> {
    /// Plain stderr, for headless runs.
    Stderr,
    /// Append to a file. The TUI owns the terminal, so it logs here.
    File(&'a Path),
}

/// Pick the filter directive: explicit override, then `RUST_LOG`, then the fallback.
pub fn resolve_filter(override_filter: Option<&str>, fallback: &str) -> EnvFilter {
    if let Some(directive) = override_filter {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_tracing(filter: EnvFilter, target: LogTarget<'_>) -> std::io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    // A second init (tests, embedding) is harmless; keep the first subscriber.
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
