//! Byte-oriented transport boundary
//!
//! The engine treats both channels identically: no protocol negotiation,
//! no framing, just raw bytes in and out. Concrete implementations (UART,
//! telnet socket) live with the host binding, not here.

/// One independent byte channel (serial link, network text stream).
pub trait Transport {
    /// Number of bytes currently readable without blocking.
    fn bytes_available(&mut self) -> usize;

    /// Read one byte. Returns `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write raw bytes. Delivery is best-effort; a disconnected peer
    /// silently discards.
    fn write_bytes(&mut self, buf: &[u8]);
}

/// Identity of a transport within the console.
///
/// Used to key per-transport state (line editors); never shared across
/// instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportId {
    /// Local serial link.
    Local,
    /// Remote network text stream.
    Remote,
}

impl TransportId {
    /// Index into per-transport state arrays.
    pub fn index(self) -> usize {
        match self {
            TransportId::Local => 0,
            TransportId::Remote => 1,
        }
    }
}
