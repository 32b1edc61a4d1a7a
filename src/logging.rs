//! Tracing subscriber setup for the a365 binary

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the log filter.
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG` is
/// honoured, defaulting to info.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("a365=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("a365=info"))
    }
}

/// Install the global subscriber.
///
/// Logs go to `log_path` as JSON lines. If the log file cannot be opened
/// they go to stderr instead. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(log_path: &Path, verbose: bool) -> Option<WorkerGuard> {
    let filter = log_filter(verbose);

    match open_log_writer(log_path) {
        Some((writer, guard)) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(writer).with_ansi(false))
                .with(filter)
                .try_init();
            report_init_failure(installed);
            Some(guard)
        }
        None => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .with(filter)
                .try_init();
            report_init_failure(installed);
            None
        }
    }
}

/// Note on stderr when a global subscriber was already installed
fn report_init_failure(installed: Result<(), TryInitError>) -> bool {
    match installed {
        Ok(()) => true,
        Err(e) => {
            eprintln!("a365: logging not initialised: {}", e);
            false
        }
    }
}

fn open_log_writer(log_path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_string_lossy().into_owned();
    std::fs::create_dir_all(dir).ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .ok()?;

    Some(tracing_appender::non_blocking(appender))
}
