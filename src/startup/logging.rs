//! `tracing` subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file. The one-shot search
//! command logs to stderr, leaving stdout for results.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Build the filter from `directive`, falling back to `info` when it does not parse.
pub fn build_env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// Returns an error only when the log file cannot be opened. A second call
/// leaves the first subscriber in place.
pub fn init_logging(target: &LogTarget, directive: &str) -> io::Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            init_logging_with_writer(directive, Mutex::new(file), false);
        }
        LogTarget::Stderr => init_logging_with_writer(directive, io::stderr, true),
    }
    tracing::debug!(?target, "Logging initialized");
    Ok(())
}

pub fn init_logging_with_writer<W>(directive: &str, writer: W, with_ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(with_ansi)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(directive))
        .with(layer)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
