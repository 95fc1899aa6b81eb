//! Demo host for the trainer's debug console.
//!
//! Spawns the console and log file up front, then emits a few lines at every
//! severity the way the trainer does during injection. In release builds all
//! of this compiles to nothing.

fn main() {
    logging::logger_spawn_console!();
    logging::logger_set_loglvl!(logging::LogLevel::Info);
    logging::logger_set_time_precision!(logging::TimePrecision::Full);
    logging::logger_spawn_log_file!();

    logging::loginfo!("trainer attached, module base resolved");
    logging::logwarn!("entity cache stale after {} ticks", 128);
    logging::logerr!("pattern scan failed for `{}`", "LocalPlayer");

    // A second spawn request only warns; the window is reused.
    logging::logger_spawn_console!();
}
