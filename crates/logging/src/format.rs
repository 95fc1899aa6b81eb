//! crates/logging/src/format.rs
//! Bounded message rendering with truncation on overflow.

use std::fmt::{self, Write};

/// Upper bound, in bytes, of a rendered message body.
pub const MESSAGE_LIMIT: usize = 1024;

/// Accumulates formatted output up to [`MESSAGE_LIMIT`] bytes.
///
/// Overflow is dropped at a character boundary instead of reported; the
/// formatting machinery never observes an error from this writer.
struct BoundedBuffer {
    buffer: String,
}

impl Write for BoundedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MESSAGE_LIMIT.saturating_sub(self.buffer.len());
        if remaining == 0 {
            return Ok(());
        }

        if s.len() <= remaining {
            self.buffer.push_str(s);
        } else {
            let mut cut = remaining;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            self.buffer.push_str(&s[..cut]);
        }

        Ok(())
    }
}

/// Renders `args` into a message body of at most [`MESSAGE_LIMIT`] bytes.
///
/// # Examples
///
/// ```
/// use logging::render_bounded;
///
/// assert_eq!(render_bounded(format_args!("value={}", 5)), "value=5");
/// ```
#[must_use]
pub fn render_bounded(args: fmt::Arguments<'_>) -> String {
    let mut bounded = BoundedBuffer {
        buffer: String::new(),
    };
    // Our writer never errors; overflow is truncated instead.
    let _ = fmt::write(&mut bounded, args);
    bounded.buffer
}
