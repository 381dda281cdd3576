//! Tracing setup. The TUI owns the terminal, so logs go to a daily rolling
//! file under `<cache_dir>/arxiv-triage/logs/`.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "ARXIV_TRIAGE_LOG";
const LOG_FILE_PREFIX: &str = "arxiv-triage.log";

pub fn log_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arxiv-triage")
        .join("logs")
}

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(&dir, LOG_FILE_PREFIX));
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
