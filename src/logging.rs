//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file. Plain
//! subcommands log to stderr. `RUST_LOG` overrides the default level in
//! both cases.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "entity.log";

/// Default log file: `<cache_dir>/entity-001/entity.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the level filter: `RUST_LOG` if set, `default_level` otherwise.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to `path` (truncated) at `info` by default.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let fmt_layer = fmt::layer().with_writer(Arc::new(file)).with_ansi(false);
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter("info"))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Log to stderr at `warn` by default.
pub fn init_stderr() -> Result<()> {
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).without_time();
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter("warn"))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_app_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("entity-001/entity.log"));
        }
    }

    #[test]
    fn subscriber_writes_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("test.log");
        let file = {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(&path).unwrap()
        };
        let subscriber = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
            .with(EnvFilter::new("info"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hello from the entity");
            tracing::debug!("filtered out");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("hello from the entity"));
        assert!(!content.contains("filtered out"));
    }
}
