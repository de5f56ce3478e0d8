//! Dual-transport command console engine
//!
//! Per-transport line editing, tokenization, command registry, dispatch with
//! argument-count validation, grouped help, and output multiplexing. One
//! line editor instance per transport; no shared buffer state between them.

pub mod completion;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod help;
pub mod history;
pub mod line_editor;
pub mod output;
pub mod registry;
pub mod tokenizer;

pub use completion::Completer;
pub use dispatch::{dispatch, DispatchOutcome};
pub use engine::Console;
pub use error::{CommandError, RegisterError};
pub use history::History;
pub use line_editor::{Echo, LineBuffer, LineEditor};
pub use output::{ActiveInterface, ConsoleOutput, OutputMux};
pub use registry::{CommandDescriptor, CommandGroup, CommandHandler, CommandRegistry};
pub use tokenizer::tokenize;
