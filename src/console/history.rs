//! In-session command history
//!
//! Fixed ring buffer, one instance per transport. Nothing is persisted
//! across restarts.

use super::config::{HISTORY_SIZE, LINE_SIZE};

/// Command history ring buffer with up/down navigation.
pub struct History {
    /// Ring buffer of submitted lines
    entries: [[u8; LINE_SIZE]; HISTORY_SIZE],
    /// Length of each entry
    lengths: [usize; HISTORY_SIZE],
    /// Next slot to write
    write_idx: usize,
    /// Number of valid entries
    count: usize,
    /// Navigation position (0 = newest, count-1 = oldest)
    nav_pos: Option<usize>,
}

impl History {
    /// Create empty history
    pub const fn new() -> Self {
        Self {
            entries: [[0u8; LINE_SIZE]; HISTORY_SIZE],
            lengths: [0; HISTORY_SIZE],
            write_idx: 0,
            count: 0,
            nav_pos: None,
        }
    }

    /// Record a submitted line and reset navigation.
    pub fn push(&mut self, line: &str) {
        let bytes = line.as_bytes();
        let len = bytes.len().min(LINE_SIZE);

        self.entries[self.write_idx][..len].copy_from_slice(&bytes[..len]);
        self.lengths[self.write_idx] = len;

        self.write_idx = (self.write_idx + 1) % HISTORY_SIZE;
        self.count = (self.count + 1).min(HISTORY_SIZE);
        self.nav_pos = None;
    }

    /// Step to the previous (older) line.
    pub fn get_prev(&mut self) -> Option<&str> {
        if self.count == 0 {
            return None;
        }

        let pos = match self.nav_pos {
            None => 0,                              // start at newest
            Some(p) if p + 1 < self.count => p + 1, // go older
            Some(p) => p,                           // already at oldest
        };

        self.nav_pos = Some(pos);
        self.get_at(pos)
    }

    /// Step to the next (newer) line; `None` means back to live input.
    pub fn get_next(&mut self) -> Option<&str> {
        match self.nav_pos {
            None => None,
            Some(0) => {
                self.nav_pos = None;
                None
            }
            Some(p) => {
                self.nav_pos = Some(p - 1);
                self.get_at(p - 1)
            }
        }
    }

    /// Leave navigation mode (call when the user types).
    pub fn reset_nav(&mut self) {
        self.nav_pos = None;
    }

    fn get_at(&self, nav_pos: usize) -> Option<&str> {
        if nav_pos >= self.count {
            return None;
        }

        // write_idx points at the next write slot, so newest is one behind
        let idx = (self.write_idx + HISTORY_SIZE - 1 - nav_pos) % HISTORY_SIZE;
        let len = self.lengths[idx];

        core::str::from_utf8(&self.entries[idx][..len]).ok()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
