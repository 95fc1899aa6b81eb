//! crates/platform/src/ansi.rs
//! Portable console backend writing ANSI escape sequences to stdout.

use std::io::{self, Write};

use crate::{Console, TextColor};

/// SGR sequence matching the Win32 attribute each palette entry stands for.
const fn sgr(color: TextColor) -> &'static str {
    match color {
        TextColor::LightGray => "\x1b[37m",
        TextColor::Yellow => "\x1b[93m",
        TextColor::LightRed => "\x1b[91m",
        TextColor::Aqua => "\x1b[36m",
    }
}

/// Console backend for hosts that already have a terminal attached.
///
/// There is no console window to allocate on these hosts, so
/// [`acquire`](Console::acquire) only retitles the terminal via the OSC 0
/// sequence. Colors are rendered with standard SGR escapes and reset on
/// release.
#[derive(Debug, Default)]
pub struct AnsiConsole {
    _private: (),
}

impl AnsiConsole {
    /// Creates a backend writing to the process's stdout.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn emit(text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl Console for AnsiConsole {
    fn acquire(&mut self, title: &str) {
        Self::emit(&format!("\x1b]0;{title}\x07"));
    }

    fn set_color(&mut self, color: TextColor) {
        Self::emit(sgr(color));
    }

    fn write(&mut self, text: &str) {
        Self::emit(text);
    }

    fn release(&mut self) {
        Self::emit("\x1b[0m");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_maps_every_palette_entry() {
        assert_eq!(sgr(TextColor::LightGray), "\x1b[37m");
        assert_eq!(sgr(TextColor::Yellow), "\x1b[93m");
        assert_eq!(sgr(TextColor::LightRed), "\x1b[91m");
        assert_eq!(sgr(TextColor::Aqua), "\x1b[36m");
    }

    #[test]
    fn console_operations_do_not_panic() {
        let mut console = AnsiConsole::new();
        console.acquire("title");
        console.set_color(TextColor::Yellow);
        console.write("segment");
        console.release();
    }
}
