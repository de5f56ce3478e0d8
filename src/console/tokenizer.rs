//! Command line tokenizer
//!
//! Splits on the space character; runs of spaces collapse, so no empty
//! tokens are produced. Token 0 is the command name by convention.

use alloc::vec::Vec;

/// Split a completed line into ordered tokens.
///
/// An empty or all-space line yields an empty sequence, in which case
/// dispatch is skipped by the caller.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}
