//! crates/platform/src/win32.rs
//! Win32 console backend: window allocation, stream redirection, attributes.

#![allow(unsafe_code)]

use windows::Win32::Foundation::{CloseHandle, GENERIC_READ, GENERIC_WRITE, HANDLE};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_ATTRIBUTE_NORMAL, FILE_SHARE_READ, FILE_SHARE_WRITE, OPEN_EXISTING,
};
use windows::Win32::System::Console::{
    AllocConsole, CONSOLE_CHARACTER_ATTRIBUTES, FreeConsole, STD_ERROR_HANDLE, STD_INPUT_HANDLE,
    STD_OUTPUT_HANDLE, SetConsoleTextAttribute, SetConsoleTitleW, SetStdHandle, WriteConsoleW,
};
use windows::core::PCWSTR;

use crate::{Console, TextColor};

/// Win32 character attribute for each palette entry.
const fn attribute(color: TextColor) -> u16 {
    match color {
        TextColor::LightGray => 7,
        TextColor::Yellow => 14,
        TextColor::LightRed => 12,
        TextColor::Aqua => 3,
    }
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn open_device(name: &str) -> Option<HANDLE> {
    let name = wide(name);
    // SAFETY: `name` is a valid nul-terminated UTF-16 buffer that outlives the call.
    unsafe {
        CreateFileW(
            PCWSTR(name.as_ptr()),
            GENERIC_READ.0 | GENERIC_WRITE.0,
            FILE_SHARE_READ | FILE_SHARE_WRITE,
            None,
            OPEN_EXISTING,
            FILE_ATTRIBUTE_NORMAL,
            None,
        )
    }
    .ok()
}

/// Console backend owning the trainer's dedicated console window.
///
/// Acquisition allocates a console for the process, reopens `CONOUT$` and
/// `CONIN$`, and installs them as the process standard handles so host code
/// that prints through the usual streams lands in the same window. The output
/// handle is retained for per-segment attribute changes. OS failures are
/// swallowed; a logger must never take its host down.
#[derive(Debug, Default)]
pub struct Win32Console {
    output: Option<HANDLE>,
    input: Option<HANDLE>,
}

impl Win32Console {
    /// Creates a backend with no console attached yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: None,
            input: None,
        }
    }
}

impl Console for Win32Console {
    fn acquire(&mut self, title: &str) {
        // SAFETY: plain Win32 calls on handles this backend owns.
        unsafe {
            let _ = AllocConsole();

            if let Some(output) = open_device("CONOUT$") {
                let _ = SetStdHandle(STD_OUTPUT_HANDLE, output);
                let _ = SetStdHandle(STD_ERROR_HANDLE, output);
                self.output = Some(output);
            }
            if let Some(input) = open_device("CONIN$") {
                let _ = SetStdHandle(STD_INPUT_HANDLE, input);
                self.input = Some(input);
            }

            let title = wide(title);
            let _ = SetConsoleTitleW(PCWSTR(title.as_ptr()));
        }
    }

    fn set_color(&mut self, color: TextColor) {
        if let Some(output) = self.output {
            // SAFETY: `output` was opened by `acquire` and is still live.
            let _ = unsafe {
                SetConsoleTextAttribute(output, CONSOLE_CHARACTER_ATTRIBUTES(attribute(color)))
            };
        }
    }

    fn write(&mut self, text: &str) {
        if let Some(output) = self.output {
            let units: Vec<u16> = text.encode_utf16().collect();
            let mut written = 0u32;
            // SAFETY: `units` stays alive across the call; `written` is a
            // valid out-pointer.
            let _ = unsafe { WriteConsoleW(output, &units, Some(&mut written), None) };
        }
    }

    fn release(&mut self) {
        // SAFETY: closes only handles this backend opened, then detaches.
        unsafe {
            if let Some(output) = self.output.take() {
                let _ = CloseHandle(output);
            }
            if let Some(input) = self.input.take() {
                let _ = CloseHandle(input);
            }
            let _ = FreeConsole();
        }
    }
}
