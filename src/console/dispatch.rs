//! Command dispatch
//!
//! Resolves token 0 against the registry, validates the argument count and
//! runs the handler synchronously. Handler failure is converted into a
//! reported outcome at this boundary; nothing propagates out.

use alloc::format;

use log::debug;

use super::output::ConsoleOutput;
use super::registry::CommandRegistry;

/// Result of dispatching one token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler ran without signaling failure.
    Ok,
    /// Empty token sequence; nothing was done.
    Skipped,
    /// No descriptor matches token 0; no handler ran.
    NotFound,
    /// Token count below the descriptor minimum; handler did not run.
    InvalidArgs,
    /// Handler signaled failure during execution.
    ExecutionError,
}

/// Dispatch a token sequence.
///
/// Too many arguments is tolerated: a warning is reported and the handler
/// still runs, consulting only the tokens it expects.
pub fn dispatch(
    registry: &CommandRegistry,
    tokens: &[&str],
    out: &mut dyn ConsoleOutput,
) -> DispatchOutcome {
    let Some(&name) = tokens.first() else {
        return DispatchOutcome::Skipped;
    };

    let Some(cmd) = registry.find(name) else {
        out.println(&format!("Unknown command: {}", name));
        out.println("Type 'help' for available commands");
        return DispatchOutcome::NotFound;
    };

    if tokens.len() < cmd.min_args {
        out.println("Error: Invalid arguments");
        out.println(&format!("Usage: {}", cmd.usage_or_name()));
        return DispatchOutcome::InvalidArgs;
    }
    if tokens.len() > cmd.max_args {
        out.println("Warning: too many arguments, ignoring extra ones");
    }

    let outcome = match cmd.handler.invoke(tokens, registry, out) {
        Ok(()) => DispatchOutcome::Ok,
        Err(err) => {
            out.println(&format!("Error: command execution failed ({})", err));
            DispatchOutcome::ExecutionError
        }
    };
    debug!("dispatch '{}' -> {:?}", cmd.name, outcome);
    outcome
}
