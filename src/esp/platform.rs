//! `Platform` implementation over ESP-IDF

use std::cell::RefCell;

use esp_idf_svc::sys;
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};

use esp32_console::platform::{
    ChipInfo, MemoryStats, Platform, PlatformError, ScanResult, WifiStatus,
};

pub struct EspPlatform {
    wifi: RefCell<BlockingWifi<EspWifi<'static>>>,
}

impl EspPlatform {
    pub fn new(wifi: BlockingWifi<EspWifi<'static>>) -> Self {
        Self {
            wifi: RefCell::new(wifi),
        }
    }
}

fn esp_err(e: impl std::fmt::Display) -> PlatformError {
    PlatformError::new(e.to_string())
}

impl Platform for EspPlatform {
    fn wifi_status(&self) -> WifiStatus {
        let wifi = self.wifi.borrow();
        let connected = wifi.is_connected().unwrap_or(false);
        if !connected {
            return WifiStatus::default();
        }

        let ssid = match wifi.get_configuration() {
            Ok(Configuration::Client(c)) => c.ssid.to_string(),
            _ => String::new(),
        };
        let ip = wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .map(|i| i.ip.to_string())
            .unwrap_or_default();

        let mut rssi: i32 = 0;
        // SAFETY: plain FFI query, rssi is a valid out pointer
        unsafe {
            sys::esp_wifi_sta_get_rssi(&mut rssi);
        }

        WifiStatus {
            connected,
            ssid,
            ip,
            rssi,
        }
    }

    fn wifi_scan(&self) -> Result<Vec<ScanResult>, PlatformError> {
        let mut wifi = self.wifi.borrow_mut();
        let aps = wifi.scan().map_err(esp_err)?;
        Ok(aps
            .into_iter()
            .map(|ap| ScanResult {
                ssid: ap.ssid.to_string(),
                rssi: ap.signal_strength as i32,
                open: ap.auth_method == Some(AuthMethod::None),
            })
            .collect())
    }

    fn wifi_connect(&self, ssid: &str, psk: &str) -> Result<bool, PlatformError> {
        let mut wifi = self.wifi.borrow_mut();
        let config = Configuration::Client(ClientConfiguration {
            ssid: ssid.try_into().map_err(|_| PlatformError::new("SSID too long"))?,
            password: psk.try_into().map_err(|_| PlatformError::new("PSK too long"))?,
            ..Default::default()
        });
        wifi.set_configuration(&config).map_err(esp_err)?;
        if !wifi.is_started().map_err(esp_err)? {
            wifi.start().map_err(esp_err)?;
        }
        match wifi.connect().and_then(|_| wifi.wait_netif_up()) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    fn wifi_disconnect(&self) -> Result<(), PlatformError> {
        self.wifi.borrow_mut().disconnect().map_err(esp_err)
    }

    fn gpio_read(&self, pin: u8) -> Result<u8, PlatformError> {
        // SAFETY: pin number validated by the caller against the chip range
        unsafe {
            sys::gpio_set_direction(pin as i32, sys::gpio_mode_t_GPIO_MODE_INPUT);
            Ok(sys::gpio_get_level(pin as i32) as u8)
        }
    }

    fn gpio_write(&self, pin: u8, level: bool) -> Result<(), PlatformError> {
        // SAFETY: pin number validated by the caller against the chip range
        unsafe {
            sys::gpio_set_direction(pin as i32, sys::gpio_mode_t_GPIO_MODE_OUTPUT);
            sys::gpio_set_level(pin as i32, level as u32);
        }
        Ok(())
    }

    fn adc_read(&self) -> Result<u16, PlatformError> {
        // SAFETY: legacy one-shot read on ADC1 channel 0
        unsafe {
            sys::adc1_config_width(sys::adc_bits_width_t_ADC_WIDTH_BIT_12);
            let raw = sys::adc1_get_raw(sys::adc1_channel_t_ADC1_CHANNEL_0);
            if raw < 0 {
                return Err(PlatformError::new("ADC read failed"));
            }
            Ok(raw as u16)
        }
    }

    fn chip_info(&self) -> ChipInfo {
        let mut info = sys::esp_chip_info_t::default();
        let mut mac = [0u8; 6];
        let mut flash_size: u32 = 0;
        // SAFETY: plain FFI queries into valid out pointers
        unsafe {
            sys::esp_chip_info(&mut info);
            sys::esp_read_mac(mac.as_mut_ptr(), sys::esp_mac_type_t_ESP_MAC_WIFI_STA);
            sys::esp_flash_get_size(std::ptr::null_mut(), &mut flash_size);
        }

        let model = match info.model {
            sys::esp_chip_model_t_CHIP_ESP32 => "ESP32",
            sys::esp_chip_model_t_CHIP_ESP32S2 => "ESP32-S2",
            sys::esp_chip_model_t_CHIP_ESP32S3 => "ESP32-S3",
            sys::esp_chip_model_t_CHIP_ESP32C3 => "ESP32-C3",
            _ => "unknown",
        };
        let sdk = unsafe {
            std::ffi::CStr::from_ptr(sys::esp_get_idf_version())
                .to_string_lossy()
                .into_owned()
        };

        ChipInfo {
            model: model.to_string(),
            cores: info.cores as u32,
            cpu_freq_mhz: unsafe { sys::ets_get_cpu_frequency() },
            flash_size_mb: flash_size / 1024 / 1024,
            sdk_version: sdk,
            mac_address: format!(
                "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
                mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
            ),
        }
    }

    fn memory_stats(&self) -> MemoryStats {
        // SAFETY: plain FFI heap queries
        unsafe {
            MemoryStats {
                free_heap: sys::esp_get_free_heap_size(),
                heap_size: sys::heap_caps_get_total_size(sys::MALLOC_CAP_DEFAULT) as u32,
                min_free_heap: sys::esp_get_minimum_free_heap_size(),
                max_alloc_heap: sys::heap_caps_get_largest_free_block(sys::MALLOC_CAP_DEFAULT)
                    as u32,
            }
        }
    }

    fn time_string(&self) -> String {
        let mut now: sys::time_t = 0;
        let mut tm = sys::tm::default();
        // SAFETY: localtime_r writes into the provided tm
        unsafe {
            sys::time(&mut now);
            sys::localtime_r(&now, &mut tm);
        }
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            tm.tm_year + 1900,
            tm.tm_mon + 1,
            tm.tm_mday,
            tm.tm_hour,
            tm.tm_min,
            tm.tm_sec
        )
    }

    fn restart(&self) {
        log::info!("restarting");
        // SAFETY: does not return
        unsafe {
            sys::esp_restart();
        }
    }
}
