//! crates/logging/src/logger.rs
//! The debug logger state machine: filtering, lazy sinks, teardown.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use platform::{Console, SystemConsole, TextColor};

use crate::logfile::{self, LogFileError};
use crate::{CallSite, LogLevel, TimePrecision, branding, format, timestamp};

/// Accent color of the timestamp segment, independent of severity.
const TIMESTAMP_COLOR: TextColor = TextColor::Aqua;

/// Strategy for locating the root under which the log directory lives.
///
/// Resolution happens on every open attempt, matching the contract that an
/// unresolvable profile directory suppresses file logging for that attempt
/// only rather than permanently.
#[derive(Clone, Debug, Default)]
pub enum HomeSource {
    /// The user's home/profile directory as reported by the environment.
    #[default]
    System,
    /// An explicit root, for tests and embedders.
    Fixed(PathBuf),
    /// No resolvable root; every attempt is silently skipped.
    Unset,
}

impl HomeSource {
    fn resolve(&self) -> Option<PathBuf> {
        match self {
            Self::System => dirs::home_dir(),
            Self::Fixed(path) => Some(path.clone()),
            Self::Unset => None,
        }
    }
}

/// Process-local debug logger writing colored console lines and an optional
/// plain-text mirror file.
///
/// Both sinks are acquired lazily by the first message that survives the
/// severity filter. The console is acquired at most once; the log file is
/// retried until it opens or fails permanently. Dropping the logger closes
/// the file and releases the console.
///
/// # Examples
///
/// ```
/// use logging::{DebugLogger, HomeSource, LogLevel, MemoryConsole, call_site};
///
/// let mut logger = DebugLogger::with_parts(MemoryConsole::new(), HomeSource::Unset);
/// logger.set_min_level(LogLevel::Info);
/// logger.println(LogLevel::Error, call_site!(), format_args!("scan failed"));
///
/// assert!(logger.console().rendered().contains("ERROR : scan failed"));
/// ```
#[derive(Debug)]
pub struct DebugLogger<C: Console = SystemConsole> {
    min_level: LogLevel,
    time_precision: TimePrecision,
    console: C,
    console_ready: bool,
    file: Option<File>,
    file_failed: bool,
    home_source: HomeSource,
}

impl DebugLogger<SystemConsole> {
    /// Creates a logger bound to the host's real console device.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(SystemConsole::default())
    }
}

impl Default for DebugLogger<SystemConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> DebugLogger<C> {
    /// Creates a logger over an explicit console backend.
    #[must_use]
    pub fn with_console(console: C) -> Self {
        Self::with_parts(console, HomeSource::System)
    }

    /// Creates a logger from a console backend and a log-root strategy.
    #[must_use]
    pub fn with_parts(console: C, home_source: HomeSource) -> Self {
        Self {
            min_level: LogLevel::default(),
            time_precision: TimePrecision::default(),
            console,
            console_ready: false,
            file: None,
            file_failed: false,
            home_source,
        }
    }

    /// Current severity threshold.
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Current timestamp precision.
    #[must_use]
    pub const fn time_precision(&self) -> TimePrecision {
        self.time_precision
    }

    /// Reports whether the console has been acquired.
    #[must_use]
    pub const fn console_ready(&self) -> bool {
        self.console_ready
    }

    /// Reports whether the log file is open.
    #[must_use]
    pub const fn file_ready(&self) -> bool {
        self.file.is_some()
    }

    /// Reports whether file logging failed permanently.
    #[must_use]
    pub const fn file_open_failed(&self) -> bool {
        self.file_failed
    }

    /// Borrows the console backend.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutably borrows the console backend.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Sets the minimum severity; messages below it are dropped before any
    /// formatting or I/O.
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Sets the timestamp rendering granularity.
    pub fn set_time_precision(&mut self, precision: TimePrecision) {
        self.time_precision = precision;
    }

    /// Replaces the log-root strategy used by future open attempts.
    pub fn set_home_source(&mut self, home_source: HomeSource) {
        self.home_source = home_source;
    }

    /// Attaches the console window, idempotently.
    ///
    /// A repeated request warns through the existing sink and changes
    /// nothing.
    pub fn ensure_console(&mut self) {
        if self.console_ready {
            self.println(
                LogLevel::Warn,
                crate::call_site!(),
                format_args!("Commandline already exists. Ignoring."),
            );
            return;
        }

        self.console.acquire(branding::CONSOLE_TITLE);
        self.console_ready = true;
    }

    /// Opens the log file, idempotently and permanently sticky on failure.
    ///
    /// An unresolvable home directory skips the attempt without setting the
    /// failure flag; a later attempt may still succeed. Directory-creation
    /// failure and file-open failure both disable file logging for the rest
    /// of the logger's lifetime, the latter reporting the OS error through
    /// the console sink.
    pub fn ensure_log_file(&mut self) {
        if self.file_failed || self.file.is_some() {
            return;
        }

        let Some(home) = self.home_source.resolve() else {
            return;
        };
        let dir = home.join(branding::LOG_DIR_NAME);

        match logfile::open_log_file(&dir) {
            Ok((file, path)) => {
                self.file = Some(file);
                self.println(
                    LogLevel::Info,
                    crate::call_site!(),
                    format_args!("log file path `{}`", path.display()),
                );
            }
            Err(LogFileError::CreateDir { .. }) => {
                self.file_failed = true;
            }
            Err(LogFileError::Open { path, source }) => {
                self.file_failed = true;
                let code = source.raw_os_error().unwrap_or(-1);
                self.println(
                    LogLevel::Error,
                    crate::call_site!(),
                    format_args!(
                        "Failed to create log file at `{}` with os error `{code}`. \
                         Try creating directory `{}` manually; probable cause is \
                         insufficient permissions.",
                        path.display(),
                        dir.display(),
                    ),
                );
            }
        }
    }

    /// Formats and emits one log line.
    ///
    /// Messages below the threshold return before any side effect. Sinks are
    /// acquired lazily; the console receives colored segments, the file an
    /// uncolored copy of the same line, flushed immediately.
    pub fn println(&mut self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }

        if !self.console_ready {
            self.ensure_console();
        }
        if self.file.is_none() && !self.file_failed {
            self.ensure_log_file();
        }

        let body = format!("{}{}", level.label(), format::render_bounded(args));
        let stamp = timestamp::render_timestamp(self.time_precision, &Local::now().naive_local());
        let tag = site.to_string();

        self.console.set_color(TIMESTAMP_COLOR);
        self.console.write(&stamp);
        self.console.set_color(level.color());
        self.console.write(&tag);
        self.console.write(&body);
        self.console.write("\n");

        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(file, "{stamp}{tag}{body}");
            let _ = file.flush();
        }
    }
}

impl<C: Console> Drop for DebugLogger<C> {
    fn drop(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
        self.console.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::memory::MemoryConsole;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    fn site() -> CallSite {
        CallSite::new("app.cpp", 42, "run")
    }

    fn memory_logger() -> DebugLogger<MemoryConsole> {
        DebugLogger::with_parts(MemoryConsole::new(), HomeSource::Unset)
    }

    mod filtering {
        use super::*;

        #[test]
        fn emits_iff_level_at_or_above_threshold() {
            let levels = [LogLevel::Info, LogLevel::Warn, LogLevel::Error];

            for threshold in levels {
                for level in levels {
                    let mut logger = memory_logger();
                    logger.set_min_level(threshold);
                    logger.println(level, site(), format_args!("probe"));

                    let emitted = !logger.console().rendered().is_empty();
                    assert_eq!(
                        emitted,
                        level >= threshold,
                        "level {level:?} against threshold {threshold:?}"
                    );
                }
            }
        }

        #[test]
        fn default_threshold_drops_info_and_warn() {
            let mut logger = memory_logger();
            logger.println(LogLevel::Info, site(), format_args!("a"));
            logger.println(LogLevel::Warn, site(), format_args!("b"));

            assert!(logger.console().rendered().is_empty());

            logger.println(LogLevel::Error, site(), format_args!("c"));
            assert_eq!(logger.console().lines().len(), 1);
        }

        #[test]
        fn filtered_message_acquires_no_resources() {
            let root = tempfile::tempdir().expect("tempdir");
            let mut logger = DebugLogger::with_parts(
                MemoryConsole::new(),
                HomeSource::Fixed(root.path().to_path_buf()),
            );

            logger.println(LogLevel::Info, site(), format_args!("dropped"));

            assert_eq!(logger.console().acquire_count(), 0);
            assert!(!logger.console_ready());
            assert!(!logger.file_ready());
            assert!(!root.path().join(branding::LOG_DIR_NAME).exists());
        }
    }

    mod console {
        use super::*;

        #[test]
        fn first_emit_acquires_console_once() {
            let mut logger = memory_logger();
            logger.println(LogLevel::Error, site(), format_args!("one"));
            logger.println(LogLevel::Error, site(), format_args!("two"));

            assert_eq!(logger.console().acquire_count(), 1);
            assert_eq!(logger.console().title(), Some(branding::CONSOLE_TITLE));
        }

        #[test]
        fn repeated_spawn_warns_without_reacquiring() {
            let mut logger = memory_logger();
            logger.set_min_level(LogLevel::Info);
            logger.ensure_console();
            logger.ensure_console();

            assert_eq!(logger.console().acquire_count(), 1);
            let lines = logger.console().lines();
            assert_eq!(lines.len(), 1);
            assert!(lines[0].contains("WARNING : Commandline already exists. Ignoring."));
        }

        #[test]
        fn repeated_spawn_warning_respects_threshold() {
            let mut logger = memory_logger();
            logger.ensure_console();
            logger.ensure_console();

            // Default threshold is Error; the Warn notice is filtered.
            assert_eq!(logger.console().acquire_count(), 1);
            assert!(logger.console().rendered().is_empty());
        }

        #[test]
        fn segments_are_colored_per_spec() {
            let mut logger = memory_logger();
            logger.set_min_level(LogLevel::Info);
            logger.set_time_precision(TimePrecision::Partial);
            logger.println(LogLevel::Warn, site(), format_args!("value={}", 5));

            let segments = logger.console().segments();
            assert_eq!(segments.len(), 4);
            assert_eq!(segments[0].color, TextColor::Aqua);
            assert!(segments[0].text.starts_with('[') && segments[0].text.ends_with("] "));
            assert_eq!(segments[1].color, TextColor::Yellow);
            assert_eq!(segments[1].text, "[app.cpp:42:run()] ");
            assert_eq!(segments[2].color, TextColor::Yellow);
            assert_eq!(segments[2].text, "WARNING : value=5");
            assert_eq!(segments[3].text, "\n");
        }

        #[test]
        fn error_lines_use_light_red() {
            let mut logger = memory_logger();
            logger.set_time_precision(TimePrecision::None);
            logger.println(LogLevel::Error, site(), format_args!("boom"));

            let segments = logger.console().segments();
            assert_eq!(segments[1].color, TextColor::LightRed);
            assert_eq!(segments[2].text, "ERROR : boom");
        }
    }

    mod file_sink {
        use super::*;

        #[test]
        fn mirrors_lines_to_file_uncolored() {
            let root = tempfile::tempdir().expect("tempdir");
            let mut logger = DebugLogger::with_parts(
                MemoryConsole::new(),
                HomeSource::Fixed(root.path().to_path_buf()),
            );
            logger.set_min_level(LogLevel::Info);
            logger.set_time_precision(TimePrecision::None);

            logger.println(LogLevel::Warn, site(), format_args!("value={}", 5));

            let dir = root.path().join(branding::LOG_DIR_NAME);
            let entries: Vec<_> = fs::read_dir(&dir)
                .expect("log dir exists")
                .map(|e| e.expect("entry").path())
                .collect();
            assert_eq!(entries.len(), 1);

            let content = fs::read_to_string(&entries[0]).expect("read log");
            let lines: Vec<&str> = content.lines().collect();
            assert_eq!(lines.len(), 2, "open notice plus the warning: {content:?}");
            assert!(lines[0].contains("INFO : log file path `"));
            assert_eq!(lines[1], "[app.cpp:42:run()] WARNING : value=5");
        }

        #[test]
        fn open_notice_is_filtered_at_default_threshold() {
            let root = tempfile::tempdir().expect("tempdir");
            let mut logger = DebugLogger::with_parts(
                MemoryConsole::new(),
                HomeSource::Fixed(root.path().to_path_buf()),
            );
            logger.set_time_precision(TimePrecision::None);

            logger.println(LogLevel::Error, site(), format_args!("boom"));

            let dir = root.path().join(branding::LOG_DIR_NAME);
            let entries: Vec<_> = fs::read_dir(&dir)
                .expect("log dir exists")
                .map(|e| e.expect("entry").path())
                .collect();
            let content = fs::read_to_string(&entries[0]).expect("read log");
            assert_eq!(content, "[app.cpp:42:run()] ERROR : boom\n");
        }

        #[test]
        fn unresolved_home_skips_attempt_without_sticky_failure() {
            let mut logger = memory_logger();
            logger.set_min_level(LogLevel::Info);

            logger.println(LogLevel::Warn, site(), format_args!("no home"));
            assert!(!logger.file_ready());
            assert!(!logger.file_open_failed());

            // The next attempt with a resolvable root succeeds.
            let root = tempfile::tempdir().expect("tempdir");
            logger.set_home_source(HomeSource::Fixed(root.path().to_path_buf()));
            logger.println(LogLevel::Warn, site(), format_args!("home found"));

            assert!(logger.file_ready());
            assert!(root.path().join(branding::LOG_DIR_NAME).is_dir());
        }

        #[test]
        fn blocked_directory_fails_sticky_and_silent() {
            let root = tempfile::tempdir().expect("tempdir");
            let home = root.path().join("home");
            fs::create_dir(&home).expect("mkdir home");
            fs::write(home.join(branding::LOG_DIR_NAME), b"blocker").expect("write blocker");

            let mut logger =
                DebugLogger::with_parts(MemoryConsole::new(), HomeSource::Fixed(home));
            logger.set_min_level(LogLevel::Info);
            logger.println(LogLevel::Warn, site(), format_args!("first"));

            assert!(!logger.file_ready());
            assert!(logger.file_open_failed());
            // Directory-creation failure is silent; only the warning itself
            // reaches the console.
            assert_eq!(logger.console().lines().len(), 1);

            // The failure is sticky even after the root becomes usable.
            let good = tempfile::tempdir().expect("tempdir");
            logger.set_home_source(HomeSource::Fixed(good.path().to_path_buf()));
            logger.println(LogLevel::Warn, site(), format_args!("second"));

            assert!(!logger.file_ready());
            assert!(logger.file_open_failed());
            assert!(!good.path().join(branding::LOG_DIR_NAME).exists());
        }

        #[cfg(unix)]
        #[test]
        fn unwritable_directory_reports_os_error_once() {
            use std::os::unix::fs::PermissionsExt;

            let root = tempfile::tempdir().expect("tempdir");
            let dir = root.path().join(branding::LOG_DIR_NAME);
            fs::create_dir(&dir).expect("mkdir");
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).expect("chmod");

            // Privileged users bypass the mode bits; nothing to observe then.
            if File::create(dir.join("probe")).is_ok() {
                return;
            }

            let mut logger = DebugLogger::with_parts(
                MemoryConsole::new(),
                HomeSource::Fixed(root.path().to_path_buf()),
            );
            logger.set_min_level(LogLevel::Info);
            logger.println(LogLevel::Warn, site(), format_args!("first"));

            assert!(logger.file_open_failed());
            let rendered = logger.console().rendered();
            assert!(rendered.contains("ERROR : Failed to create log file"));
            assert!(rendered.contains("os error"));
            assert!(rendered.contains(dir.to_str().expect("utf-8 dir")));

            // Subsequent messages do not re-report.
            logger.console_mut().clear();
            logger.println(LogLevel::Warn, site(), format_args!("second"));
            assert!(!logger.console().rendered().contains("Failed to create log file"));

            fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod back");
        }
    }

    mod teardown {
        use super::*;

        struct SharedConsole(Rc<RefCell<MemoryConsole>>);

        impl Console for SharedConsole {
            fn acquire(&mut self, title: &str) {
                self.0.borrow_mut().acquire(title);
            }
            fn set_color(&mut self, color: TextColor) {
                self.0.borrow_mut().set_color(color);
            }
            fn write(&mut self, text: &str) {
                self.0.borrow_mut().write(text);
            }
            fn release(&mut self) {
                self.0.borrow_mut().release();
            }
        }

        #[test]
        fn drop_releases_console_and_flushes_file() {
            let shared = Rc::new(RefCell::new(MemoryConsole::new()));
            let root = tempfile::tempdir().expect("tempdir");

            {
                let mut logger = DebugLogger::with_parts(
                    SharedConsole(Rc::clone(&shared)),
                    HomeSource::Fixed(root.path().to_path_buf()),
                );
                logger.println(LogLevel::Error, site(), format_args!("last words"));
                assert!(logger.file_ready());
            }

            assert!(shared.borrow().released());

            let dir = root.path().join(branding::LOG_DIR_NAME);
            let entry = fs::read_dir(&dir)
                .expect("log dir")
                .next()
                .expect("one file")
                .expect("entry");
            let content = fs::read_to_string(entry.path()).expect("read log");
            assert!(content.contains("ERROR : last words"));
        }
    }
}
