//! Console sizing and prompt constants
//!
//! Static allocation throughout: the line buffers and history rings are
//! fixed arrays sized here.

/// Maximum input line length, bytes. Input beyond this is dropped.
pub const LINE_SIZE: usize = 128;

/// In-session history depth per transport.
pub const HISTORY_SIZE: usize = 8;

/// Prompt re-issued after every dispatch.
pub const PROMPT: &str = "> ";

/// Column width for command names in group listings.
pub const HELP_PAD: usize = 15;
