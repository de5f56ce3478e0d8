//! Concrete transports: UART serial link and telnet-style TCP stream

use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

use esp32_console::transport::Transport;

/// Local serial link over UART0 (115200 8N1).
pub struct SerialTransport {
    uart: UartDriver<'static>,
}

impl SerialTransport {
    pub fn new(
        uart: uart::UART0,
        tx: gpio::Gpio1,
        rx: gpio::Gpio3,
    ) -> Result<Self, EspError> {
        let config = uart::config::Config::new().baudrate(Hertz(115_200));
        let uart = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<gpio::Gpio0>::None,
            Option::<gpio::Gpio0>::None,
            &config,
        )?;
        Ok(Self { uart })
    }
}

impl Transport for SerialTransport {
    fn bytes_available(&mut self) -> usize {
        self.uart.remaining_read().unwrap_or(0)
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, NON_BLOCK) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }

    fn write_bytes(&mut self, buf: &[u8]) {
        let _ = self.uart.write(buf);
    }
}

/// Remote text stream: single-client TCP listener, raw line-oriented bytes.
///
/// No telnet option negotiation; a client sending IAC sequences will see
/// them echoed back as ordinary bytes.
pub struct TelnetTransport {
    listener: TcpListener,
    client: Option<TcpStream>,
    rx: VecDeque<u8>,
}

impl TelnetTransport {
    pub fn new(port: u16) -> std::io::Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port))?;
        listener.set_nonblocking(true)?;
        Ok(Self {
            listener,
            client: None,
            rx: VecDeque::new(),
        })
    }

    /// Accept a pending client and drain whatever it has sent.
    fn pump(&mut self) {
        if self.client.is_none() {
            if let Ok((stream, peer)) = self.listener.accept() {
                if stream.set_nonblocking(true).is_ok() {
                    log::info!("telnet client connected: {}", peer);
                    self.client = Some(stream);
                }
            }
        }

        let Some(client) = &mut self.client else {
            return;
        };
        let mut buf = [0u8; 64];
        loop {
            match client.read(&mut buf) {
                Ok(0) => {
                    log::info!("telnet client disconnected");
                    self.client = None;
                    break;
                }
                Ok(n) => self.rx.extend(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) => {
                    log::warn!("telnet read error: {}", e);
                    self.client = None;
                    break;
                }
            }
        }
    }
}

impl Transport for TelnetTransport {
    fn bytes_available(&mut self) -> usize {
        self.pump();
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_bytes(&mut self, buf: &[u8]) {
        if let Some(client) = &mut self.client {
            if client.write_all(buf).is_err() {
                self.client = None;
            }
        }
    }
}
