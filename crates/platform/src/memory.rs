//! crates/platform/src/memory.rs
//! In-memory console backend recording writes for tests and embedders.

use crate::{Console, TextColor};

/// One colored text segment written to a [`MemoryConsole`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// Color selected when the segment was written.
    pub color: TextColor,
    /// Text content of the segment.
    pub text: String,
}

/// Console backend that records everything instead of talking to the OS.
///
/// Used by the logger's own tests to assert on segment ordering and coloring,
/// and available to embedders that want to capture console output.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    acquire_count: u32,
    title: Option<String>,
    released: bool,
    color: TextColor,
    segments: Vec<Segment>,
}

impl MemoryConsole {
    /// Creates an empty recording console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`Console::acquire`] was invoked.
    #[must_use]
    pub const fn acquire_count(&self) -> u32 {
        self.acquire_count
    }

    /// Title passed to the most recent acquisition, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Reports whether [`Console::release`] has run.
    #[must_use]
    pub const fn released(&self) -> bool {
        self.released
    }

    /// Recorded segments in write order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All recorded text concatenated, colors discarded.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Complete lines of the rendered output.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rendered()
            .split_terminator('\n')
            .map(str::to_owned)
            .collect()
    }

    /// Discards all recorded segments, keeping acquisition state.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl Console for MemoryConsole {
    fn acquire(&mut self, title: &str) {
        self.acquire_count += 1;
        self.title = Some(title.to_owned());
    }

    fn set_color(&mut self, color: TextColor) {
        self.color = color;
    }

    fn write(&mut self, text: &str) {
        self.segments.push(Segment {
            color: self.color,
            text: text.to_owned(),
        });
    }

    fn release(&mut self) {
        self.released = true;
    }
}
