//! `tracing` subscriber setup for use with [`TracingSink`](crate::TracingSink).
//!
//! Filters come from `RUST_LOG` when it is set, otherwise from the default
//! directive passed in.

use std::error::Error;
use std::path::Path;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if set and valid, `default` otherwise.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// A subscriber appending plain-text events to `dir/file_name`.
///
/// Writes happen synchronously on the logging thread and the file is never
/// rotated.
pub fn file_subscriber(
    dir: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let appender = tracing_appender::rolling::never(dir, file_name);
    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .finish()
}

/// Installs a global subscriber printing to stderr.
pub fn init_console(filter: EnvFilter) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .try_init()
}
