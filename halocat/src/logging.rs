//! Logging infrastructure for halocat.
//!
//! Provides structured logging with console output and optional file
//! output:
//! - `init()` — stdout logging for CLI use
//! - `init_with_file(dir)` — stdout plus a non-blocking file writer
//! - Filter configurable via `RUST_LOG` (defaults to `info`)

use std::fs;
use std::io;
use std::path::Path;

use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log filename used by `init_with_file`.
pub const LOG_FILENAME: &str = "halocat.log";

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize stdout-only logging.
pub fn init() -> LoggingGuard {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_timer(LocalTime::new(Rfc3339))
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_layer)
        .init();

    LoggingGuard { _file_guard: None }
}

/// Initialize logging with both stdout and file output.
///
/// Creates `log_dir` if needed and appends to `halocat.log` inside it.
///
/// # Errors
///
/// Returns an error when the log directory cannot be created.
pub fn init_with_file(log_dir: &Path) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILENAME);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_timer(LocalTime::new(Rfc3339));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_timer(LocalTime::new(Rfc3339))
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: Some(file_guard),
    })
}
