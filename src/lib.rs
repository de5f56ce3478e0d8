//! # esp32-console
//!
//! Interactive command console for embedded devices, reachable concurrently
//! over two byte-oriented transports (local serial link, network text stream).
//!
//! ## Architecture
//!
//! The engine is strictly single-threaded and cooperative: one [`Console::poll`]
//! step drains the bytes currently available on each transport through that
//! transport's own line editor. A completed line is tokenized and dispatched
//! against the [`CommandRegistry`]; the handler runs to completion before the
//! next input byte is looked at. Output fans out to one or both transports
//! according to the process-wide [`ActiveInterface`] selector.
//!
//! Hardware concerns (Wi-Fi, GPIO, ADC, chip info, restart) live behind the
//! [`Platform`] trait and are invoked by command handlers, never by the engine.
//!
//! [`Console::poll`]: console::Console::poll
//! [`CommandRegistry`]: console::CommandRegistry
//! [`ActiveInterface`]: console::ActiveInterface
//! [`Platform`]: platform::Platform

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod builtins;
pub mod console;
pub mod platform;
pub mod transport;

pub use console::{
    ActiveInterface, CommandDescriptor, CommandError, CommandGroup, CommandRegistry, Console,
    ConsoleOutput, DispatchOutcome, RegisterError,
};
pub use platform::Platform;
pub use transport::Transport;
