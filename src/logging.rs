//! File logging.
//!
//! The terminal belongs to the viewer, so log records go to a file in the
//! system temp directory. Verbosity follows `RUST_LOG` (default `warn`).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Builds `codonscope-<8 hex digits>.log` inside `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    let suffix: u32 = rand::random();
    dir.join(format!("codonscope-{:08x}.log", suffix))
}

/// Installs the global subscriber writing to a fresh log file.
///
/// Returns the path of the log file.
pub fn init_file_logging() -> Result<PathBuf> {
    let path = log_file_path(&std::env::temp_dir());
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(path)
}
