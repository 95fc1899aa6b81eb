//! crates/logging/src/macros.rs
//! Logging and configuration macros, swapped for no-ops in release builds.
//!
//! Call sites must go through these macros rather than the logger methods so
//! release builds drop every call entirely: the no-op expansions swallow
//! their tokens, leaving arguments unevaluated, exactly like the debug
//! facility never existed.

/// Emits a line at an explicit [`LogLevel`](crate::LogLevel).
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, logline};
///
/// // Below the default Error threshold, so nothing is acquired or written.
/// logline!(LogLevel::Info, "offset scan took {}ms", 12);
/// ```
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logline {
    ($level:expr, $($arg:tt)*) => {
        $crate::global::println($level, $crate::call_site!(), ::core::format_args!($($arg)*))
    };
}

/// Release no-op; arguments are not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logline {
    ($level:expr, $($arg:tt)*) => {
        ()
    };
}

/// Emits an informational line.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! loginfo {
    ($($arg:tt)*) => {
        $crate::logline!($crate::LogLevel::Info, $($arg)*)
    };
}

/// Release no-op; arguments are not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! loginfo {
    ($($arg:tt)*) => {
        ()
    };
}

/// Emits a warning line.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logwarn {
    ($($arg:tt)*) => {
        $crate::logline!($crate::LogLevel::Warn, $($arg)*)
    };
}

/// Release no-op; arguments are not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logwarn {
    ($($arg:tt)*) => {
        ()
    };
}

/// Emits an error line.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logerr {
    ($($arg:tt)*) => {
        $crate::logline!($crate::LogLevel::Error, $($arg)*)
    };
}

/// Release no-op; arguments are not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logerr {
    ($($arg:tt)*) => {
        ()
    };
}

/// Spawns the console window ahead of the first emitted line.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logger_spawn_console {
    () => {
        $crate::global::spawn_console()
    };
}

/// Release no-op.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logger_spawn_console {
    () => {
        ()
    };
}

/// Opens the log file ahead of the first emitted line.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logger_spawn_log_file {
    () => {
        $crate::global::spawn_log_file()
    };
}

/// Release no-op.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logger_spawn_log_file {
    () => {
        ()
    };
}

/// Sets the minimum severity of the process-wide logger.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logger_set_loglvl {
    ($level:expr) => {
        $crate::global::set_min_level($level)
    };
}

/// Release no-op; the level expression is not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logger_set_loglvl {
    ($level:expr) => {
        ()
    };
}

/// Sets the timestamp precision of the process-wide logger.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! logger_set_time_precision {
    ($precision:expr) => {
        $crate::global::set_time_precision($precision)
    };
}

/// Release no-op; the precision expression is not evaluated.
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! logger_set_time_precision {
    ($precision:expr) => {
        ()
    };
}
