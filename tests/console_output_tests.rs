//! Output multiplexer and active-interface tests

mod common;

use common::MockTransport;
use esp32_console::console::OutputMux;
use esp32_console::{ActiveInterface, ConsoleOutput};

#[test]
fn test_local_mode_writes_local_only() {
    let mut local = MockTransport::new();
    let mut remote = MockTransport::new();
    let mut mode = ActiveInterface::Local;

    let mut out = OutputMux::new(&mut local, &mut remote, &mut mode);
    out.println("hello");
    drop(out);

    assert_eq!(local.output(), "hello\r\n");
    assert!(remote.output().is_empty());
}

#[test]
fn test_both_mode_writes_both() {
    let mut local = MockTransport::new();
    let mut remote = MockTransport::new();
    let mut mode = ActiveInterface::Both;

    let mut out = OutputMux::new(&mut local, &mut remote, &mut mode);
    out.print("hi");
    drop(out);

    assert_eq!(local.output(), "hi");
    assert_eq!(remote.output(), "hi");
}

#[test]
fn test_switch_confirmation_goes_to_new_selection() {
    let mut local = MockTransport::new();
    let mut remote = MockTransport::new();
    let mut mode = ActiveInterface::Local;

    let mut out = OutputMux::new(&mut local, &mut remote, &mut mode);
    out.set_interface(ActiveInterface::Remote);
    drop(out);

    assert_eq!(mode, ActiveInterface::Remote);
    assert!(local.output().is_empty());
    assert_eq!(remote.output(), "Switched to REMOTE\r\n");
}

#[test]
fn test_switch_to_both_confirms_on_both() {
    let mut local = MockTransport::new();
    let mut remote = MockTransport::new();
    let mut mode = ActiveInterface::Remote;

    let mut out = OutputMux::new(&mut local, &mut remote, &mut mode);
    out.set_interface(ActiveInterface::Both);
    drop(out);

    assert_eq!(local.output(), "Switched to BOTH\r\n");
    assert_eq!(remote.output(), "Switched to BOTH\r\n");
}

#[test]
fn test_interface_defaults_to_local() {
    assert_eq!(ActiveInterface::default(), ActiveInterface::Local);
}

#[test]
fn test_from_token_parsing() {
    assert_eq!(
        ActiveInterface::from_token("local"),
        Some(ActiveInterface::Local)
    );
    assert_eq!(
        ActiveInterface::from_token("REMOTE"),
        Some(ActiveInterface::Remote)
    );
    assert_eq!(
        ActiveInterface::from_token("Both"),
        Some(ActiveInterface::Both)
    );
    assert_eq!(ActiveInterface::from_token("serial"), None);
    assert_eq!(ActiveInterface::from_token(""), None);
}

#[test]
fn test_mode_routing_predicates() {
    assert!(ActiveInterface::Local.includes_local());
    assert!(!ActiveInterface::Local.includes_remote());
    assert!(!ActiveInterface::Remote.includes_local());
    assert!(ActiveInterface::Remote.includes_remote());
    assert!(ActiveInterface::Both.includes_local());
    assert!(ActiveInterface::Both.includes_remote());
}
