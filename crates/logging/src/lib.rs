#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the trainer's lazy debug console: the first emitted line pops
//! a dedicated console window, every line is colored by severity, and output
//! is mirrored to a timestamped file under `<home>/cs2logs/` when that
//! directory can be provisioned. The whole facility exists for debug builds
//! only; release builds swap every macro for a no-op that swallows its
//! arguments unevaluated.
//!
//! # Design
//!
//! The crate is built around [`DebugLogger`], an explicitly owned state
//! machine holding the severity threshold, the timestamp precision, and the
//! lazily acquired console and file sinks. All OS access goes through the
//! [`Console`] trait from the `platform` crate, so the pipeline is fully
//! testable against the recording [`MemoryConsole`] backend. A thread-local
//! instance wired to the real console backs the [`global`] accessor and the
//! macro surface ([`loginfo!`], [`logwarn!`], [`logerr!`], [`logline!`]).
//!
//! # Invariants
//!
//! - A message below the configured threshold causes no formatting, no I/O,
//!   and no resource acquisition.
//! - The file sink is never open while the sticky failure flag is set; once
//!   the flag is set, no further open attempt happens for the lifetime of
//!   the logger.
//! - Console acquisition is idempotent: a second spawn request emits a
//!   warning through the existing sink instead of allocating anything.
//! - Message bodies are rendered into a bounded buffer
//!   ([`MESSAGE_LIMIT`] bytes); overflow truncates and never errors.
//!
//! # Examples
//!
//! Drive the pipeline against the in-memory console:
//!
//! ```
//! use logging::{DebugLogger, HomeSource, LogLevel, MemoryConsole, TimePrecision, call_site};
//!
//! let mut logger = DebugLogger::with_parts(MemoryConsole::new(), HomeSource::Unset);
//! logger.set_min_level(LogLevel::Info);
//! logger.set_time_precision(TimePrecision::None);
//! logger.println(LogLevel::Warn, call_site!(), format_args!("value={}", 5));
//!
//! let output = logger.console().rendered();
//! assert!(output.contains("WARNING : value=5"));
//! assert!(output.contains("[lib.rs:"));
//! ```

pub mod branding;
mod format;
mod levels;
mod location;
mod timestamp;

#[cfg(debug_assertions)]
pub mod global;
#[cfg(debug_assertions)]
mod logfile;
#[cfg(debug_assertions)]
mod logger;

mod macros;

pub use format::{MESSAGE_LIMIT, render_bounded};
pub use levels::{LogLevel, TimePrecision};
pub use location::CallSite;
pub use timestamp::render_timestamp;

#[cfg(debug_assertions)]
pub use logfile::LogFileError;

#[cfg(debug_assertions)]
pub use logger::{DebugLogger, HomeSource};

pub use platform::memory::MemoryConsole;
pub use platform::{Console, SystemConsole, TextColor};
