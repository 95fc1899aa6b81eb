//! crates/logging/src/logfile.rs
//! Log-directory provisioning and timestamped file creation.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::branding;

/// Failure while provisioning the log directory or opening the log file.
#[derive(Debug, Error)]
pub enum LogFileError {
    /// The log directory was absent and could not be created.
    #[error("failed to create log directory `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// The log file itself could not be opened for writing.
    #[error("failed to open log file `{path}`: {source}")]
    Open {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

/// Opens a fresh log file named after the current Unix time inside `dir`.
///
/// The directory is created first when absent. Returns the open handle
/// together with the resolved path so the caller can report it.
pub(crate) fn open_log_file(dir: &Path) -> Result<(File, PathBuf), LogFileError> {
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|source| LogFileError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let stamp = Utc::now().timestamp();
    let path = dir.join(format!("{stamp}.{}", branding::LOG_FILE_EXTENSION));
    let file = File::create(&path).map_err(|source| LogFileError::Open {
        path: path.clone(),
        source,
    })?;

    Ok((file, path))
}
