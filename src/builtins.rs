//! Built-in command set
//!
//! Thin bindings over the [`Platform`] collaborator; the console engine
//! knows nothing about any of these. Each hardware-facing command is a plain
//! function bound to the shared platform handle at registration time.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::ToString;

use crate::console::{
    help, ActiveInterface, CommandDescriptor, CommandError, CommandGroup, CommandHandler,
    CommandRegistry, ConsoleOutput,
};
use crate::platform::Platform;

/// Highest GPIO number accepted by the `gpio` command.
const GPIO_MAX_PIN: u8 = 39;

/// Handler body for a command that consults the platform.
type PlatformFn = fn(&dyn Platform, &[&str], &mut dyn ConsoleOutput) -> Result<(), CommandError>;

/// Binds a platform-backed command body to the shared platform handle.
struct PlatformHandler {
    platform: Rc<dyn Platform>,
    run: PlatformFn,
}

impl CommandHandler for PlatformHandler {
    fn invoke(
        &self,
        args: &[&str],
        _registry: &CommandRegistry,
        out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        (self.run)(&*self.platform, args, out)
    }
}

/// The `help` command; needs registry access to enumerate its peers.
struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn invoke(
        &self,
        args: &[&str],
        registry: &CommandRegistry,
        out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        help::cmd_help(registry, args, out);
        Ok(())
    }
}

/// The `interface` command; operates on the output sink alone.
struct InterfaceHandler;

impl CommandHandler for InterfaceHandler {
    fn invoke(
        &self,
        args: &[&str],
        _registry: &CommandRegistry,
        out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError> {
        match args.get(1) {
            Some(token) => match ActiveInterface::from_token(token) {
                Some(mode) => out.set_interface(mode),
                None => out.println("Invalid interface. Use: local, remote, or both"),
            },
            None => {
                let current = out.interface();
                out.println(&format!("Current interface: {}", current.name()));
            }
        }
        Ok(())
    }
}

/// Register every built-in command.
///
/// Rejections (duplicates from registrations made earlier) are logged by the
/// registry and are not fatal; the earlier registration wins.
pub fn register_builtins(registry: &mut CommandRegistry, platform: Rc<dyn Platform>) {
    let bind = |run: PlatformFn| PlatformHandler {
        platform: platform.clone(),
        run,
    };

    let _ = registry.register(CommandDescriptor::new(
        "help",
        "List all available commands",
        "help [command]",
        CommandGroup::General,
        1,
        2,
        HelpHandler,
    ));
    let _ = registry.register(CommandDescriptor::new(
        "status",
        "Show system status",
        "status",
        CommandGroup::System,
        1,
        1,
        bind(cmd_status),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "info",
        "Show system information",
        "info [detail]",
        CommandGroup::System,
        1,
        2,
        bind(cmd_info),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "restart",
        "Restart the device",
        "restart",
        CommandGroup::System,
        1,
        1,
        bind(cmd_restart),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "memory",
        "Show memory usage",
        "memory",
        CommandGroup::System,
        1,
        1,
        bind(cmd_memory),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "wifi",
        "WiFi operations and information",
        "wifi <status|scan|connect|disconnect>",
        CommandGroup::Network,
        2,
        4,
        bind(cmd_wifi),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "gpio",
        "Control GPIO pins",
        "gpio <pin> <read|set|clear|toggle>",
        CommandGroup::Peripherals,
        3,
        3,
        bind(cmd_gpio),
    ));
    let _ = registry.register(CommandDescriptor::new(
        "interface",
        "Change output interface (local/remote/both)",
        "interface [local|remote|both]",
        CommandGroup::General,
        1,
        2,
        InterfaceHandler,
    ));
    let _ = registry.register(CommandDescriptor::new(
        "read",
        "Read sensor data",
        "read adc",
        CommandGroup::Peripherals,
        2,
        2,
        bind(cmd_read),
    ));
}

fn cmd_status(
    platform: &dyn Platform,
    _args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    out.println("--- System Status ---");

    let wifi = platform.wifi_status();
    if wifi.connected {
        out.println(&format!("WiFi: Connected to {}", wifi.ssid));
        out.println(&format!("IP: {}", wifi.ip));
        out.println(&format!("Signal: {} dBm", wifi.rssi));
    } else {
        out.println("WiFi: Disconnected");
    }

    out.println(&format!("Current time: {}", platform.time_string()));

    let mem = platform.memory_stats();
    out.println(&format!("Free heap: {} bytes", mem.free_heap));

    out.println(&format!("Current interface: {}", out.interface().name()));
    Ok(())
}

fn cmd_info(
    platform: &dyn Platform,
    args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    let chip = platform.chip_info();
    out.println("System Information:");
    out.println(&format!("- Chip model: {}", chip.model));
    out.println(&format!("- Chip cores: {}", chip.cores));
    out.println(&format!("- CPU frequency: {} MHz", chip.cpu_freq_mhz));
    out.println(&format!("- Flash size: {} MB", chip.flash_size_mb));
    out.println(&format!("- SDK version: {}", chip.sdk_version));

    if args.get(1).is_some_and(|a| a.eq_ignore_ascii_case("detail")) {
        let mem = platform.memory_stats();
        out.println("");
        out.println("Detailed Information:");
        out.println(&format!("- Heap size: {} KB", mem.heap_size / 1024));
        out.println(&format!("- MAC address: {}", chip.mac_address));
        out.println(&format!("- Min free heap: {} KB", mem.min_free_heap / 1024));
    }
    Ok(())
}

fn cmd_restart(
    platform: &dyn Platform,
    _args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    out.println("Restarting...");
    platform.restart();
    Ok(())
}

fn cmd_memory(
    platform: &dyn Platform,
    _args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    let mem = platform.memory_stats();
    out.println("Memory Information:");
    out.println(&format!("- Free heap: {} KB", mem.free_heap / 1024));
    out.println(&format!("- Heap size: {} KB", mem.heap_size / 1024));
    out.println(&format!("- Min free heap: {} KB", mem.min_free_heap / 1024));
    out.println(&format!("- Max alloc heap: {} KB", mem.max_alloc_heap / 1024));
    Ok(())
}

fn cmd_wifi(
    platform: &dyn Platform,
    args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    let sub = args[1];
    if sub.eq_ignore_ascii_case("status") {
        let wifi = platform.wifi_status();
        out.println("WiFi Status:");
        if wifi.connected {
            out.println("- Status: Connected");
            out.println(&format!("- SSID: {}", wifi.ssid));
            out.println(&format!("- IP address: {}", wifi.ip));
            out.println(&format!("- Signal strength: {} dBm", wifi.rssi));
        } else {
            out.println("- Status: Disconnected");
        }
    } else if sub.eq_ignore_ascii_case("scan") {
        out.println("Scanning for WiFi networks...");
        let networks = platform
            .wifi_scan()
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        if networks.is_empty() {
            out.println("No networks found");
        } else {
            out.println(&format!("{} networks found:", networks.len()));
            for (i, net) in networks.iter().enumerate() {
                out.println(&format!(
                    "{}: {} ({} dBm) {}",
                    i + 1,
                    net.ssid,
                    net.rssi,
                    if net.open { "Open" } else { "Encrypted" }
                ));
            }
        }
    } else if sub.eq_ignore_ascii_case("connect") && args.len() >= 4 {
        out.println(&format!("Connecting to: {}", args[2]));
        let connected = platform
            .wifi_connect(args[2], args[3])
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        if connected {
            out.println("Connected successfully");
            out.println(&format!("IP address: {}", platform.wifi_status().ip));
        } else {
            out.println("Failed to connect");
        }
    } else if sub.eq_ignore_ascii_case("disconnect") {
        platform
            .wifi_disconnect()
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        out.println("WiFi disconnected");
    } else {
        out.println("Unknown WiFi command");
    }
    Ok(())
}

fn cmd_gpio(
    platform: &dyn Platform,
    args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    let pin = match args[1].parse::<u8>() {
        Ok(pin) if pin <= GPIO_MAX_PIN => pin,
        _ => {
            out.println(&format!("Invalid pin number. Use 0-{}", GPIO_MAX_PIN));
            return Ok(());
        }
    };

    let op = args[2];
    if op.eq_ignore_ascii_case("read") {
        let value = platform
            .gpio_read(pin)
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        out.println(&format!("GPIO {} value: {}", pin, value));
    } else if op.eq_ignore_ascii_case("set") {
        out.println(&format!("Setting GPIO {} HIGH", pin));
        platform
            .gpio_write(pin, true)
            .map_err(|e| CommandError::Platform(e.to_string()))?;
    } else if op.eq_ignore_ascii_case("clear") {
        out.println(&format!("Setting GPIO {} LOW", pin));
        platform
            .gpio_write(pin, false)
            .map_err(|e| CommandError::Platform(e.to_string()))?;
    } else if op.eq_ignore_ascii_case("toggle") {
        out.println(&format!("Toggling GPIO {}", pin));
        let current = platform
            .gpio_read(pin)
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        platform
            .gpio_write(pin, current == 0)
            .map_err(|e| CommandError::Platform(e.to_string()))?;
    } else {
        out.println("Unknown GPIO operation. Use read, set, clear, or toggle");
    }
    Ok(())
}

fn cmd_read(
    platform: &dyn Platform,
    args: &[&str],
    out: &mut dyn ConsoleOutput,
) -> Result<(), CommandError> {
    if args[1].eq_ignore_ascii_case("adc") {
        let value = platform
            .adc_read()
            .map_err(|e| CommandError::Platform(e.to_string()))?;
        out.println(&format!("ADC value: {}", value));
    } else {
        out.println("Usage: read adc");
    }
    Ok(())
}
