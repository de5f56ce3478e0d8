//! Per-transport line editing
//!
//! One editor instance per transport, each with its own buffer, history and
//! completion state. Input on one transport can never touch the other's
//! in-progress line.

use alloc::string::String;

use super::completion::Completer;
use super::config::{LINE_SIZE, PROMPT};
use super::history::History;
use super::registry::CommandRegistry;
use crate::transport::Transport;

/// Fixed-size input accumulation buffer.
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
        }
    }

    /// Append a byte. Returns false when the buffer is full (byte dropped).
    pub fn push(&mut self, c: u8) -> bool {
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Remove the last byte, no-op on empty.
    pub fn backspace(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Discard all contents.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace contents from a string, truncating to capacity.
    pub fn set(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let copy_len = bytes.len().min(LINE_SIZE);
        self.buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
        self.len = copy_len;
    }

    /// View as a string slice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Echo sink for one transport, gated by the active interface.
///
/// When the transport is not part of the current interface selection its
/// echo is suppressed, matching the output multiplexer's routing.
pub struct Echo<'a> {
    transport: &'a mut dyn Transport,
    enabled: bool,
}

impl<'a> Echo<'a> {
    /// Wrap a transport; `enabled` is whether the active interface
    /// includes it.
    pub fn new(transport: &'a mut dyn Transport, enabled: bool) -> Self {
        Self { transport, enabled }
    }

    fn send(&mut self, bytes: &[u8]) {
        if self.enabled {
            self.transport.write_bytes(bytes);
        }
    }
}

/// ANSI escape sequence state
#[derive(Clone, Copy, PartialEq)]
enum EscapeState {
    Normal,
    Escape,  // Got ESC
    Bracket, // Got ESC [
}

/// Byte-at-a-time line editor for one transport.
pub struct LineEditor {
    line: LineBuffer,
    history: History,
    completer: Completer,
    escape_state: EscapeState,
}

impl LineEditor {
    /// Create an editor with empty state.
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: History::new(),
            completer: Completer::new(),
            escape_state: EscapeState::Normal,
        }
    }

    /// Process one raw input byte.
    ///
    /// Returns the completed line when a terminator arrives on a non-empty
    /// buffer; the buffer is cleared and the line recorded in history. A
    /// terminator on an empty buffer is a no-op, so a CR immediately
    /// followed by LF completes only once.
    pub fn feed(
        &mut self,
        byte: u8,
        registry: &CommandRegistry,
        echo: &mut Echo<'_>,
    ) -> Option<String> {
        match self.escape_state {
            EscapeState::Normal => self.feed_normal(byte, registry, echo),
            EscapeState::Escape => {
                self.escape_state = if byte == b'[' {
                    EscapeState::Bracket
                } else {
                    EscapeState::Normal
                };
                None
            }
            EscapeState::Bracket => {
                self.escape_state = EscapeState::Normal;
                match byte {
                    b'A' => self.handle_up(echo),   // Up arrow
                    b'B' => self.handle_down(echo), // Down arrow
                    _ => {}
                }
                None
            }
        }
    }

    fn feed_normal(
        &mut self,
        byte: u8,
        registry: &CommandRegistry,
        echo: &mut Echo<'_>,
    ) -> Option<String> {
        match byte {
            // Enter
            b'\r' | b'\n' => {
                if self.line.is_empty() {
                    return None;
                }
                let completed = String::from(self.line.as_str());
                self.history.push(&completed);
                self.line.clear();
                self.completer.reset();
                Some(completed)
            }

            // Backspace / DEL: destructive erase
            0x08 | 0x7F => {
                if !self.line.is_empty() {
                    self.line.backspace();
                    echo.send(b"\x08 \x08");
                }
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            // Tab
            b'\t' => {
                self.handle_tab(registry, echo);
                None
            }

            // Escape
            0x1B => {
                self.escape_state = EscapeState::Escape;
                None
            }

            // Ctrl+C: abandon the line
            0x03 => {
                echo.send(b"^C\r\n");
                self.line.clear();
                self.completer.reset();
                self.history.reset_nav();
                echo.send(PROMPT.as_bytes());
                None
            }

            // Ctrl+U: erase the displayed line
            0x15 => {
                for _ in 0..self.line.len() {
                    echo.send(b"\x08 \x08");
                }
                self.line.clear();
                None
            }

            // Printable
            0x20..=0x7E => {
                if self.line.push(byte) {
                    echo.send(&[byte]);
                }
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            _ => None,
        }
    }

    fn handle_tab(&mut self, registry: &CommandRegistry, echo: &mut Echo<'_>) {
        let input = self.line.as_str();

        // Only the command word completes; arguments are command-specific.
        let word_count = input.split(' ').filter(|w| !w.is_empty()).count();
        if word_count > 1 || input.ends_with(' ') {
            return;
        }

        let completion = self
            .completer
            .complete(input, registry.command_names())
            .map(String::from);

        if let Some(completed) = completion {
            for _ in 0..self.line.len() {
                self.line.backspace();
                echo.send(b"\x08 \x08");
            }
            for c in completed.bytes() {
                if self.line.push(c) {
                    echo.send(&[c]);
                }
            }
        }
    }

    fn handle_up(&mut self, echo: &mut Echo<'_>) {
        if let Some(prev) = self.history.get_prev().map(String::from) {
            self.replace_line(&prev, echo);
        }
    }

    fn handle_down(&mut self, echo: &mut Echo<'_>) {
        match self.history.get_next().map(String::from) {
            Some(next) => self.replace_line(&next, echo),
            // Past the newest entry: back to an empty line
            None => self.replace_line("", echo),
        }
    }

    fn replace_line(&mut self, new_line: &str, echo: &mut Echo<'_>) {
        for _ in 0..self.line.len() {
            echo.send(b"\x08 \x08");
        }
        self.line.set(new_line);
        echo.send(new_line.as_bytes());
    }

    /// Current in-progress line (for inspection).
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// True when no input is buffered.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
