//! ESP32 entry point
//!
//! Wires the console engine to a UART serial link and a telnet-style TCP
//! text stream, brings up Wi-Fi and SNTP, then runs the cooperative polling
//! loop. Built only with the `esp32` feature.

mod esp;

fn main() {
    if let Err(e) = esp::run() {
        log::error!("fatal: {}", e);
    }
}
