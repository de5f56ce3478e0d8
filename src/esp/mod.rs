//! ESP32 host binding
//!
//! Everything hardware-specific lives here: transports over UART and TCP,
//! the `Platform` implementation, Wi-Fi association and SNTP sync. The
//! console engine itself stays portable.

mod platform;
mod transport;

use std::error::Error;
use std::rc::Rc;

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::log::EspLogger;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::sntp::EspSntp;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};

use esp32_console::builtins::register_builtins;
use esp32_console::console::Console;

use platform::EspPlatform;
use transport::{SerialTransport, TelnetTransport};

/// Telnet-style listener port. Raw line-oriented text, no option negotiation.
const TELNET_PORT: u16 = 23;

/// Wi-Fi credentials, injected at build time.
const WIFI_SSID: &str = match option_env!("CONSOLE_WIFI_SSID") {
    Some(s) => s,
    None => "changeme",
};
const WIFI_PSK: &str = match option_env!("CONSOLE_WIFI_PSK") {
    Some(s) => s,
    None => "changeme",
};

pub fn run() -> Result<(), Box<dyn Error>> {
    esp_idf_svc::sys::link_patches();
    EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let mut wifi = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs))?,
        sysloop,
    )?;
    connect_wifi(&mut wifi)?;

    // Keep the SNTP handle alive for the lifetime of the process.
    let _sntp = EspSntp::new_default()?;
    log::info!("SNTP sync started");

    let serial = SerialTransport::new(
        peripherals.uart0,
        peripherals.pins.gpio1,
        peripherals.pins.gpio3,
    )?;
    let telnet = TelnetTransport::new(TELNET_PORT)?;
    log::info!("telnet listener on port {}", TELNET_PORT);

    let platform = Rc::new(EspPlatform::new(wifi));

    let mut console = Console::new(serial, telnet);
    register_builtins(console.registry_mut(), platform);
    console.print_banner();

    loop {
        console.poll();
        FreeRtos::delay_ms(10);
    }
}

fn connect_wifi(wifi: &mut BlockingWifi<EspWifi<'static>>) -> Result<(), Box<dyn Error>> {
    let config = Configuration::Client(ClientConfiguration {
        ssid: WIFI_SSID.try_into().map_err(|_| "SSID too long")?,
        password: WIFI_PSK.try_into().map_err(|_| "PSK too long")?,
        ..Default::default()
    });
    wifi.set_configuration(&config)?;
    wifi.start()?;

    log::info!("connecting to WiFi: {}", WIFI_SSID);
    loop {
        match wifi.connect().and_then(|_| wifi.wait_netif_up()) {
            Ok(()) => break,
            Err(e) => {
                log::warn!("WiFi connection failed ({}), retrying", e);
                FreeRtos::delay_ms(500);
            }
        }
    }

    let ip = wifi.wifi().sta_netif().get_ip_info()?.ip;
    log::info!("WiFi connected, IP {}", ip);
    Ok(())
}
