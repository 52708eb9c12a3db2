//! Logging to a file, since the terminal is in raw mode while the UI runs

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global subscriber; `RUST_LOG` overrides the default level
pub fn init_logging(log_file: &Path, level: &str) -> Result<()> {
    let file = open_log_file(log_file)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(env_filter)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}

/// Open the log for appending, creating its directory if needed
fn open_log_file(log_file: &Path) -> Result<File> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))
}
