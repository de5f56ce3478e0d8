//! Output multiplexing across transports
//!
//! The [`ActiveInterface`] selector is process-wide state owned by the
//! console and consulted on every write. Handlers see the multiplexer only
//! through the [`ConsoleOutput`] trait, which keeps them testable with a
//! capture buffer.

use crate::transport::Transport;

/// Which transport(s) currently receive output.
///
/// Initializes to local-only; mutated only by explicit command or API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveInterface {
    /// Local serial link only.
    #[default]
    Local,
    /// Remote network stream only.
    Remote,
    /// Both transports.
    Both,
}

impl ActiveInterface {
    /// Output reaches the local transport in this mode.
    pub fn includes_local(self) -> bool {
        matches!(self, Self::Local | Self::Both)
    }

    /// Output reaches the remote transport in this mode.
    pub fn includes_remote(self) -> bool {
        matches!(self, Self::Remote | Self::Both)
    }

    /// Display name, upper case.
    pub fn name(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Remote => "REMOTE",
            Self::Both => "BOTH",
        }
    }

    /// Parse a user-supplied mode token, case-insensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("local") {
            Some(Self::Local)
        } else if token.eq_ignore_ascii_case("remote") {
            Some(Self::Remote)
        } else if token.eq_ignore_ascii_case("both") {
            Some(Self::Both)
        } else {
            None
        }
    }
}

/// Text sink handed to command handlers.
pub trait ConsoleOutput {
    /// Write text to the selected transport(s), no line terminator.
    fn print(&mut self, text: &str);

    /// Write text followed by `\r\n` to the selected transport(s).
    fn println(&mut self, text: &str);

    /// Current interface selection.
    fn interface(&self) -> ActiveInterface;

    /// Switch the interface selection and confirm through the newly
    /// selected transport(s).
    fn set_interface(&mut self, mode: ActiveInterface);
}

/// Fans writes out to the transports the active interface selects.
pub struct OutputMux<'a> {
    local: &'a mut dyn Transport,
    remote: &'a mut dyn Transport,
    mode: &'a mut ActiveInterface,
}

impl<'a> OutputMux<'a> {
    /// Borrow both transports and the interface selector for one dispatch.
    pub fn new(
        local: &'a mut dyn Transport,
        remote: &'a mut dyn Transport,
        mode: &'a mut ActiveInterface,
    ) -> Self {
        Self { local, remote, mode }
    }

    fn send(&mut self, bytes: &[u8]) {
        if self.mode.includes_local() {
            self.local.write_bytes(bytes);
        }
        if self.mode.includes_remote() {
            self.remote.write_bytes(bytes);
        }
    }
}

impl ConsoleOutput for OutputMux<'_> {
    fn print(&mut self, text: &str) {
        self.send(text.as_bytes());
    }

    fn println(&mut self, text: &str) {
        self.send(text.as_bytes());
        self.send(b"\r\n");
    }

    fn interface(&self) -> ActiveInterface {
        *self.mode
    }

    fn set_interface(&mut self, mode: ActiveInterface) {
        // Switch first so the confirmation lands on the new selection.
        *self.mode = mode;
        let mut msg = alloc::string::String::from("Switched to ");
        msg.push_str(mode.name());
        self.println(&msg);
    }
}
