//! Command registry tests

mod common;

use common::NoopHandler;
use esp32_console::console::{CommandDescriptor, CommandGroup, CommandRegistry, RegisterError};

fn descriptor(name: &str, group: CommandGroup, min: usize, max: usize) -> CommandDescriptor {
    CommandDescriptor::new(name, "a test command", "", group, min, max, NoopHandler)
}

#[test]
fn test_register_and_find() {
    let mut registry = CommandRegistry::new();
    registry
        .register(descriptor("status", CommandGroup::System, 1, 1))
        .unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.find("status").is_some());
}

#[test]
fn test_find_is_case_insensitive() {
    let mut registry = CommandRegistry::new();
    registry
        .register(descriptor("status", CommandGroup::System, 1, 1))
        .unwrap();

    assert!(registry.find("STATUS").is_some());
    assert!(registry.find("StAtUs").is_some());
    assert!(registry.find("statuses").is_none());
}

#[test]
fn test_duplicate_name_keeps_first() {
    let mut registry = CommandRegistry::new();
    registry
        .register(CommandDescriptor::new(
            "status",
            "the original",
            "",
            CommandGroup::System,
            1,
            1,
            NoopHandler,
        ))
        .unwrap();

    // Same name in a different case is still a duplicate
    let result = registry.register(CommandDescriptor::new(
        "STATUS",
        "the impostor",
        "",
        CommandGroup::Debug,
        1,
        3,
        NoopHandler,
    ));

    assert_eq!(result, Err(RegisterError::DuplicateName));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find("status").unwrap().description, "the original");
}

#[test]
fn test_empty_name_rejected() {
    let mut registry = CommandRegistry::new();
    let result = registry.register(descriptor("", CommandGroup::General, 1, 1));

    assert_eq!(result, Err(RegisterError::EmptyName));
    assert!(registry.is_empty());
}

#[test]
fn test_inverted_bounds_rejected() {
    let mut registry = CommandRegistry::new();
    let result = registry.register(descriptor("bad", CommandGroup::General, 3, 2));

    assert_eq!(result, Err(RegisterError::InvalidBounds));
    assert!(registry.is_empty());
}

#[test]
fn test_list_by_group_preserves_insertion_order() {
    let mut registry = CommandRegistry::new();
    registry
        .register(descriptor("zeta", CommandGroup::System, 1, 1))
        .unwrap();
    registry
        .register(descriptor("ping", CommandGroup::Network, 1, 1))
        .unwrap();
    registry
        .register(descriptor("alpha", CommandGroup::System, 1, 1))
        .unwrap();

    let system: Vec<&str> = registry
        .list_by_group(CommandGroup::System)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(system, ["zeta", "alpha"]);

    let debug: Vec<&str> = registry
        .list_by_group(CommandGroup::Debug)
        .map(|c| c.name.as_str())
        .collect();
    assert!(debug.is_empty());
}

#[test]
fn test_usage_falls_back_to_name() {
    let mut registry = CommandRegistry::new();
    registry
        .register(descriptor("restart", CommandGroup::System, 1, 1))
        .unwrap();
    registry
        .register(CommandDescriptor::new(
            "gpio",
            "pin control",
            "gpio <pin> <read|set|clear|toggle>",
            CommandGroup::Peripherals,
            3,
            3,
            NoopHandler,
        ))
        .unwrap();

    assert_eq!(registry.find("restart").unwrap().usage_or_name(), "restart");
    assert_eq!(
        registry.find("gpio").unwrap().usage_or_name(),
        "gpio <pin> <read|set|clear|toggle>"
    );
}

#[test]
fn test_command_names_in_insertion_order() {
    let mut registry = CommandRegistry::new();
    registry
        .register(descriptor("help", CommandGroup::General, 1, 2))
        .unwrap();
    registry
        .register(descriptor("status", CommandGroup::System, 1, 1))
        .unwrap();

    let names: Vec<&str> = registry.command_names().collect();
    assert_eq!(names, ["help", "status"]);
}
