//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs never go to stdout/stderr. They are
//! written to ${CONSULTA_HOME}/logs/ through a non-blocking appender.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with a daily-rolling log file.
///
/// Filter precedence: RUST_LOG env var, then the config's `log_filter`,
/// then "info". The returned guard must be kept alive for the duration of
/// the process or buffered log lines are lost.
pub fn init(config_filter: Option<&str>) -> Result<WorkerGuard> {
    let logs_dir = crate::config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log dir {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "consulta.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to set tracing subscriber: {err}"))?;

    Ok(guard)
}
