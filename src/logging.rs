use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::LevelFilter;

/// Install a file-backed `tracing` subscriber at `info` level. The terminal
/// belongs to the UI, so events only ever go to `path`. The file is truncated
/// on every start and only holds the current session.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Best-effort start-up logging. A failure is reported once on stderr and the
/// application carries on without a subscriber. Returns whether logging is on.
pub fn start_logging(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    match init_logging(path) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("book-browser: logging disabled: {err:#}");
            false
        }
    }
}
