//! Diagnostic tracing for the binaries.
//!
//! Run events (start, finish, fallback, stop) are emitted with `tracing` from
//! the runner. Nothing is printed unless a subscriber is installed here.
//!
//! - **CLI**: stderr, compact format, filtered by `RUST_LOG` (default `warn`).
//! - **TUI**: stderr belongs to the alternate screen, so output goes to the
//!   file named by `SORTVIZ_LOG_FILE`, or nowhere when it is unset.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{SortError, SortResult};

/// Environment variable naming the TUI log file.
pub const LOG_FILE_ENV: &str = "SORTVIZ_LOG_FILE";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=sortviz=debug sortviz run quick --size 20
/// ```
pub fn init() {
    // A second initialization (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

/// Initialize a subscriber that appends to `path`.
///
/// # Errors
///
/// Returns error if the file cannot be opened.
pub fn init_to_file(path: &Path) -> SortResult<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SortError::io(format!("Failed to open log file {}: {e}", path.display())))?;

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init();
    Ok(())
}

/// Initialize file logging when [`LOG_FILE_ENV`] is set.
///
/// # Errors
///
/// Returns error if the named file cannot be opened.
pub fn init_from_env() -> SortResult<()> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => init_to_file(Path::new(&path)),
        None => Ok(()),
    }
}
