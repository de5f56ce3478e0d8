//! Console engine
//!
//! Owns the two transports, one line editor per transport, the command
//! registry and the active-interface selector. Single-threaded and
//! cooperative: `poll()` once per process cycle; handlers run to completion
//! on the polling thread, stalling both transports for their duration.

use alloc::format;
use alloc::string::String;

use super::config::PROMPT;
use super::dispatch::{dispatch, DispatchOutcome};
use super::line_editor::{Echo, LineEditor};
use super::output::{ActiveInterface, ConsoleOutput, OutputMux};
use super::registry::CommandRegistry;
use super::tokenizer::tokenize;
use crate::transport::{Transport, TransportId};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Dual-transport console engine.
pub struct Console<L: Transport, R: Transport> {
    local: L,
    remote: R,
    mode: ActiveInterface,
    editors: [LineEditor; 2],
    registry: CommandRegistry,
}

impl<L: Transport, R: Transport> Console<L, R> {
    /// Create a console over the two transports. The interface selector
    /// starts at local-only.
    pub fn new(local: L, remote: R) -> Self {
        Self {
            local,
            remote,
            mode: ActiveInterface::Local,
            editors: [LineEditor::new(), LineEditor::new()],
            registry: CommandRegistry::new(),
        }
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Mutable registry access for startup registration.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Current interface selection.
    pub fn interface(&self) -> ActiveInterface {
        self.mode
    }

    /// Switch the interface selection; the confirmation message goes to the
    /// newly selected transport(s).
    pub fn set_interface(&mut self, mode: ActiveInterface) {
        let mut out = OutputMux::new(&mut self.local, &mut self.remote, &mut self.mode);
        out.set_interface(mode);
    }

    /// Borrow the local transport (inspection).
    pub fn local(&self) -> &L {
        &self.local
    }

    /// Mutable local transport access.
    pub fn local_mut(&mut self) -> &mut L {
        &mut self.local
    }

    /// Borrow the remote transport (inspection).
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Mutable remote transport access.
    pub fn remote_mut(&mut self) -> &mut R {
        &mut self.remote
    }

    /// Print the startup banner and the first prompt.
    pub fn print_banner(&mut self) {
        let mut out = OutputMux::new(&mut self.local, &mut self.remote, &mut self.mode);
        out.println(&format!("\r\n{}", VERSION));
        out.println("Type 'help' for available commands");
        out.print(PROMPT);
    }

    /// One cooperative polling step.
    ///
    /// Drains the bytes currently available on each transport through that
    /// transport's editor; absence of data is a no-op. A completed line is
    /// dispatched before any further byte is read.
    pub fn poll(&mut self) {
        self.poll_transport(TransportId::Local);
        self.poll_transport(TransportId::Remote);
    }

    fn poll_transport(&mut self, id: TransportId) {
        let (transport, enabled): (&mut dyn Transport, bool) = match id {
            TransportId::Local => (&mut self.local, self.mode.includes_local()),
            TransportId::Remote => (&mut self.remote, self.mode.includes_remote()),
        };
        let editor = &mut self.editors[id.index()];
        let registry = &self.registry;

        let mut completed: Option<String> = None;
        let available = transport.bytes_available();
        for _ in 0..available {
            let Some(byte) = transport.read_byte() else {
                break;
            };
            let mut echo = Echo::new(&mut *transport, enabled);
            if let Some(line) = editor.feed(byte, registry, &mut echo) {
                // Leave any remaining bytes for the next cycle; the command
                // runs to completion before more input is accepted.
                completed = Some(line);
                break;
            }
        }

        if let Some(line) = completed {
            self.dispatch_line(&line);
        }
    }

    /// Tokenize and dispatch one completed line, then re-issue the prompt.
    pub fn dispatch_line(&mut self, line: &str) -> DispatchOutcome {
        let tokens = tokenize(line);
        let mut out = OutputMux::new(&mut self.local, &mut self.remote, &mut self.mode);
        // Move off the echoed input line before any command output.
        out.println("");
        let outcome = dispatch(&self.registry, &tokens, &mut out);
        out.print(PROMPT);
        outcome
    }
}
