//! Logging setup.
//!
//! Verbosity comes from `-v` flags; at the default level `RUST_LOG` is
//! honoured and falls back to `warn`. Commands that own the terminal screen
//! log to `~/.breathe/breathe.log` instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::PacerError;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error
    Stderr,
    /// Append to a file
    File(&'a Path),
}

/// Build the level filter for a `-v` count.
#[must_use]
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes file output when dropped and must be held for
/// the life of the program.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(verbose: u8, target: LogTarget<'_>) -> Result<Option<WorkerGuard>, PacerError> {
    let filter = filter_for(verbose);

    match target {
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| PacerError::Config(format!("Failed to initialize logging: {e}")))?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    PacerError::Config(format!(
                        "Failed to open log file {}: {e}",
                        path.display()
                    ))
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| PacerError::Config(format!("Failed to initialize logging: {e}")))?;

            tracing::info!(log_file = %path.display(), "logging initialized");
            Ok(Some(guard))
        }
    }
}
