//! Console error types

use alloc::string::String;

/// Failure signaled by a command handler.
///
/// Contained at the dispatch boundary: a handler error is reported to the
/// user and never escapes the console loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// E01: argument value not understood by the handler
    InvalidValue,
    /// E02: value outside the accepted range
    OutOfRange,
    /// E03: the platform collaborator reported a failure
    Platform(String),
}

impl CommandError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue => "E01",
            Self::OutOfRange => "E02",
            Self::Platform(_) => "E03",
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidValue => "invalid value",
            Self::OutOfRange => "out of range",
            Self::Platform(msg) => msg,
        }
    }
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Rejected command registration.
///
/// Non-fatal: the registry keeps the earlier entry and the process continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// A descriptor with this name (case-insensitive) already exists.
    DuplicateName,
    /// Descriptor name is empty.
    EmptyName,
    /// `min_args` exceeds `max_args`.
    InvalidBounds,
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::DuplicateName => "duplicate command name",
            Self::EmptyName => "empty command name",
            Self::InvalidBounds => "min_args exceeds max_args",
        };
        f.write_str(msg)
    }
}
