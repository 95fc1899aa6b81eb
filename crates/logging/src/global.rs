//! crates/logging/src/global.rs
//! Thread-local instance backing the macro surface.

use std::cell::RefCell;
use std::fmt;

use crate::{CallSite, DebugLogger, HomeSource, LogLevel, TimePrecision};

thread_local! {
    static LOGGER: RefCell<DebugLogger> = RefCell::new(DebugLogger::new());
}

/// Runs `f` with the calling thread's logger instance.
///
/// The instance is created on first access and torn down with the thread,
/// releasing the console and log file through [`DebugLogger`]'s drop.
/// Do not emit log lines from within `f`; the instance is already borrowed.
pub fn with<R>(f: impl FnOnce(&mut DebugLogger) -> R) -> R {
    LOGGER.with(|logger| f(&mut logger.borrow_mut()))
}

/// Emits one line through the thread's logger. Prefer the logging macros.
pub fn println(level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) {
    with(|logger| logger.println(level, site, args));
}

/// Forces console acquisition ahead of the first emitted line.
pub fn spawn_console() {
    with(DebugLogger::ensure_console);
}

/// Forces the log-file open attempt ahead of the first emitted line.
pub fn spawn_log_file() {
    with(DebugLogger::ensure_log_file);
}

/// Sets the severity threshold of the thread's logger.
pub fn set_min_level(level: LogLevel) {
    with(|logger| logger.set_min_level(level));
}

/// Sets the timestamp precision of the thread's logger.
pub fn set_time_precision(precision: TimePrecision) {
    with(|logger| logger.set_time_precision(precision));
}

/// Replaces the log-root strategy of the thread's logger.
pub fn set_home_source(home_source: HomeSource) {
    with(|logger| logger.set_home_source(home_source));
}
