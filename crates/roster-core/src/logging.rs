//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to
//! `${ROSTER_HOME}/logs/roster.log`. One-shot commands log to stderr.
//! `ROSTER_LOG` overrides the configured filter in both cases.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ROSTER_LOG";

const LOG_FILE_NAME: &str = "roster.log";

/// Installs a file-backed subscriber under the default logs directory.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the duration of the program.
pub fn init_file(config: &Config) -> Result<WorkerGuard> {
    init_file_in(config, &paths::logs_dir())
}

/// Installs a file-backed subscriber writing into `dir`.
pub fn init_file_in(config: &Config, dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init();

    Ok(guard)
}

/// Installs a stderr subscriber for non-interactive commands.
pub fn init_stderr(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}
