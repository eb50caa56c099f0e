//! Log sink setup
//!
//! The terminal belongs to the TUI, so logs go to a file under the local
//! data directory. `RUST_LOG` takes precedence over the configured level.

use crate::{MultiMasterError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file location: $DATA_LOCAL_HOME/multimaster/multimaster.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        MultiMasterError::Logging("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter from RUST_LOG, falling back to `level` for this crate
pub fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", APP_NAME, level)))
}

/// Install a global subscriber appending to `path`
pub fn init_file_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| MultiMasterError::Logging(e.to_string()))
}
