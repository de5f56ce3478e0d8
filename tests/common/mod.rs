//! Shared test doubles: in-memory transport, capture output sink, stub
//! platform and a few canned handlers.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use esp32_console::console::{CommandError, CommandHandler, CommandRegistry};
use esp32_console::platform::{
    ChipInfo, MemoryStats, Platform, PlatformError, ScanResult, WifiStatus,
};
use esp32_console::{ActiveInterface, ConsoleOutput, Transport};

/// In-memory transport: bytes fed into `rx` are read by the console,
/// everything the console writes lands in `tx`.
pub struct MockTransport {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
        }
    }

    pub fn feed(&mut self, s: &str) {
        self.rx.extend(s.bytes());
    }

    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }

    pub fn clear_output(&mut self) {
        self.tx.clear();
    }
}

impl Transport for MockTransport {
    fn bytes_available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_bytes(&mut self, buf: &[u8]) {
        self.tx.extend_from_slice(buf);
    }
}

/// Output sink that captures text into a string, for handler-level tests
/// that don't need real transports.
pub struct CaptureOutput {
    pub buf: String,
    pub mode: ActiveInterface,
}

impl CaptureOutput {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            mode: ActiveInterface::Local,
        }
    }
}

impl ConsoleOutput for CaptureOutput {
    fn print(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn println(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push_str("\r\n");
    }

    fn interface(&self) -> ActiveInterface {
        self.mode
    }

    fn set_interface(&mut self, mode: ActiveInterface) {
        self.mode = mode;
        let msg = format!("Switched to {}", mode.name());
        self.println(&msg);
    }
}

/// Stub platform with canned data and interior-mutable knobs.
pub struct MockPlatform {
    pub connected: Cell<bool>,
    pub scan_fails: Cell<bool>,
    pub restarts: Cell<u32>,
    pub pins: RefCell<[u8; 40]>,
    pub adc_value: Cell<u16>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            connected: Cell::new(true),
            scan_fails: Cell::new(false),
            restarts: Cell::new(0),
            pins: RefCell::new([0; 40]),
            adc_value: Cell::new(2048),
        }
    }
}

impl Platform for MockPlatform {
    fn wifi_status(&self) -> WifiStatus {
        if self.connected.get() {
            WifiStatus {
                connected: true,
                ssid: "testnet".to_string(),
                ip: "192.168.1.50".to_string(),
                rssi: -42,
            }
        } else {
            WifiStatus::default()
        }
    }

    fn wifi_scan(&self) -> Result<Vec<ScanResult>, PlatformError> {
        if self.scan_fails.get() {
            return Err(PlatformError::new("scan failed"));
        }
        Ok(vec![
            ScanResult {
                ssid: "testnet".to_string(),
                rssi: -42,
                open: false,
            },
            ScanResult {
                ssid: "cafe".to_string(),
                rssi: -70,
                open: true,
            },
        ])
    }

    fn wifi_connect(&self, _ssid: &str, _psk: &str) -> Result<bool, PlatformError> {
        self.connected.set(true);
        Ok(true)
    }

    fn wifi_disconnect(&self) -> Result<(), PlatformError> {
        self.connected.set(false);
        Ok(())
    }

    fn gpio_read(&self, pin: u8) -> Result<u8, PlatformError> {
        Ok(self.pins.borrow()[pin as usize])
    }

    fn gpio_write(&self, pin: u8, level: bool) -> Result<(), PlatformError> {
        self.pins.borrow_mut()[pin as usize] = level as u8;
        Ok(())
    }

    fn adc_read(&self) -> Result<u16, PlatformError> {
        Ok(self.adc_value.get())
    }

    fn chip_info(&self) -> ChipInfo {
        ChipInfo {
            model: "ESP32".to_string(),
            cores: 2,
            cpu_freq_mhz: 240,
            flash_size_mb: 4,
            sdk_version: "v5.1.2".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
        }
    }

    fn memory_stats(&self) -> MemoryStats {
        MemoryStats {
            free_heap: 200_000,
            heap_size: 320_000,
            min_free_heap: 150_000,
            max_alloc_heap: 100_000,
        }
    }

    fn time_string(&self) -> String {
        "2024-01-01 12:00:00".to_string()
    }

    fn restart(&self) {
        self.restarts.set(self.restarts.get() + 1);
    }
}

/// Handler that does nothing and succeeds.
pub struct NoopHandler;

impl CommandHandler for NoopHandler {
    fn invoke(
        &self,
        _args: &[&str],
        _registry: &CommandRegistry,
        _out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        Ok(())
    }
}

/// Handler that counts its invocations.
pub struct CountingHandler(pub Rc<Cell<usize>>);

impl CommandHandler for CountingHandler {
    fn invoke(
        &self,
        _args: &[&str],
        _registry: &CommandRegistry,
        _out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

/// Handler that always fails.
pub struct FailingHandler;

impl CommandHandler for FailingHandler {
    fn invoke(
        &self,
        _args: &[&str],
        _registry: &CommandRegistry,
        _out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        Err(CommandError::InvalidValue)
    }
}
