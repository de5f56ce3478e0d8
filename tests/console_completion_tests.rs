//! Tab completion tests

use esp32_console::console::completion::Completer;

// Candidate names in registration order
static TEST_COMMANDS: &[&str] = &["help", "status", "restart", "memory", "read", "interface"];

#[test]
fn test_complete_first_match() {
    let mut completer = Completer::new();

    let result = completer.complete("re", TEST_COMMANDS.iter().copied());
    assert_eq!(result, Some("restart"));
}

#[test]
fn test_complete_cycle_in_registration_order() {
    let mut completer = Completer::new();

    let r1 = completer.complete("re", TEST_COMMANDS.iter().copied());
    assert_eq!(r1, Some("restart"));

    let r2 = completer.complete("re", TEST_COMMANDS.iter().copied());
    assert_eq!(r2, Some("read"));

    // Wrap around
    let r3 = completer.complete("re", TEST_COMMANDS.iter().copied());
    assert_eq!(r3, Some("restart"));
}

#[test]
fn test_complete_reset_on_different_prefix() {
    let mut completer = Completer::new();

    completer.complete("re", TEST_COMMANDS.iter().copied());

    // Changing the prefix restarts cycling
    let result = completer.complete("rea", TEST_COMMANDS.iter().copied());
    assert_eq!(result, Some("read"));
}

#[test]
fn test_complete_reset_call_restarts_cycle() {
    let mut completer = Completer::new();

    completer.complete("re", TEST_COMMANDS.iter().copied());
    completer.reset();

    let result = completer.complete("re", TEST_COMMANDS.iter().copied());
    assert_eq!(result, Some("restart"));
}

#[test]
fn test_complete_no_match() {
    let mut completer = Completer::new();

    let result = completer.complete("xyz", TEST_COMMANDS.iter().copied());
    assert_eq!(result, None);
}

#[test]
fn test_complete_exact_match() {
    let mut completer = Completer::new();

    let result = completer.complete("help", TEST_COMMANDS.iter().copied());
    assert_eq!(result, Some("help"));
}
