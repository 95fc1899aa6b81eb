//! crates/logging/src/branding.rs
//! Product strings shared by the console and log-file surfaces.

/// Title of the dedicated console window.
pub const CONSOLE_TITLE: &str = "CS2 trainer logs";

/// Directory under the user profile that receives log files.
pub const LOG_DIR_NAME: &str = "cs2logs";

/// Extension of the timestamped log files.
pub const LOG_FILE_EXTENSION: &str = "log";
