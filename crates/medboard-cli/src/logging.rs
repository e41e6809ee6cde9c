//! Tracing subscriber setup
//!
//! The interactive dashboard owns the terminal, so its logs go to a file.
//! One-shot commands log to stderr.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Directives for our own crates at `level`; dependencies stay at warn
pub fn default_directives(level: LogLevel) -> String {
    format!(
        "warn,medboard={level},medboard_cli={level},medboard_engine={level},medboard_runtime={level}"
    )
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to initialise logging: {e}")),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("failed to initialise logging: {e}"))
        }
    }
}
