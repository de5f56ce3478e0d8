//! Platform collaborator boundary
//!
//! Everything the built-in commands need from the host environment: network
//! association state, pin access, chip metadata, restart. The console engine
//! itself never calls into this trait; only command handlers do, so a host
//! without hardware (tests, simulators) can supply a stub.

use alloc::string::String;
use alloc::vec::Vec;

/// Failure reported by the host binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    msg: String,
}

impl PlatformError {
    /// Create an error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl core::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}

/// Current Wi-Fi association state.
#[derive(Debug, Clone, Default)]
pub struct WifiStatus {
    /// Associated with an access point.
    pub connected: bool,
    /// SSID of the associated network (empty when disconnected).
    pub ssid: String,
    /// Assigned IP address, dotted quad.
    pub ip: String,
    /// Signal strength in dBm.
    pub rssi: i32,
}

/// One access point found by a scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub ssid: String,
    pub rssi: i32,
    /// Network has no encryption.
    pub open: bool,
}

/// Static chip metadata.
#[derive(Debug, Clone, Default)]
pub struct ChipInfo {
    pub model: String,
    pub cores: u32,
    pub cpu_freq_mhz: u32,
    pub flash_size_mb: u32,
    pub sdk_version: String,
    pub mac_address: String,
}

/// Heap statistics, in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStats {
    pub free_heap: u32,
    pub heap_size: u32,
    pub min_free_heap: u32,
    pub max_alloc_heap: u32,
}

/// Host services invoked by the built-in commands.
pub trait Platform {
    /// Current Wi-Fi association state.
    fn wifi_status(&self) -> WifiStatus;

    /// Scan for access points. Blocks for the duration of the scan.
    fn wifi_scan(&self) -> Result<Vec<ScanResult>, PlatformError>;

    /// Associate with an access point. Blocks until connected or given up;
    /// `Ok(true)` means associated.
    fn wifi_connect(&self, ssid: &str, psk: &str) -> Result<bool, PlatformError>;

    /// Drop the current association.
    fn wifi_disconnect(&self) -> Result<(), PlatformError>;

    /// Read a pin as digital input. Returns 0 or 1.
    fn gpio_read(&self, pin: u8) -> Result<u8, PlatformError>;

    /// Drive a pin as digital output.
    fn gpio_write(&self, pin: u8, level: bool) -> Result<(), PlatformError>;

    /// Read the default ADC channel.
    fn adc_read(&self) -> Result<u16, PlatformError>;

    /// Chip metadata.
    fn chip_info(&self) -> ChipInfo;

    /// Heap statistics.
    fn memory_stats(&self) -> MemoryStats;

    /// Wall-clock time formatted `YYYY-MM-DD hh:mm:ss`.
    fn time_string(&self) -> String;

    /// Restart the device. May return on hosts where restarting is a no-op.
    fn restart(&self);
}
