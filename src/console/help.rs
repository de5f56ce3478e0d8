//! Grouped help reporting

use alloc::format;

use super::config::HELP_PAD;
use super::output::ConsoleOutput;
use super::registry::{CommandGroup, CommandRegistry};

/// List every command in a group, one padded `name - description` row per
/// descriptor in registry order. Returns the number of commands shown;
/// an empty group reports "no commands" and returns 0.
pub fn show_group_commands(
    registry: &CommandRegistry,
    group: CommandGroup,
    out: &mut dyn ConsoleOutput,
) -> usize {
    out.println("");
    out.println(&format!("=== {} Commands ===", group.name()));

    let mut count = 0;
    for cmd in registry.list_by_group(group) {
        out.println(&format!(
            "  {:<width$}- {}",
            cmd.name,
            cmd.description,
            width = HELP_PAD
        ));
        count += 1;
    }
    if count == 0 {
        out.println("No commands found in this group");
    }
    count
}

/// Detailed help for one command, case-insensitive lookup.
///
/// Argument bounds are shown without the command-name slot, so a descriptor
/// with bounds [1,2] reports "0 to 1 arguments". Returns false when the
/// command is unknown; the caller decides the user-facing message.
pub fn show_command_help(
    registry: &CommandRegistry,
    name: &str,
    out: &mut dyn ConsoleOutput,
) -> bool {
    let Some(cmd) = registry.find(name) else {
        return false;
    };
    out.println(&format!("Command: {}", cmd.name));
    out.println(&format!("Description: {}", cmd.description));
    out.println(&format!("Usage: {}", cmd.usage_or_name()));
    out.println(&format!("Group: {}", cmd.group.name()));
    out.println(&format!(
        "Arguments: {} to {} arguments",
        cmd.min_args.saturating_sub(1),
        cmd.max_args.saturating_sub(1)
    ));
    true
}

/// The `help` command body: bare `help` walks every group in enumeration
/// order; `help <command>` shows that command or reports it unknown.
pub fn cmd_help(registry: &CommandRegistry, args: &[&str], out: &mut dyn ConsoleOutput) {
    if let Some(&name) = args.get(1) {
        if !show_command_help(registry, name, out) {
            out.println(&format!("Unknown command: {}", name));
        }
    } else {
        for group in CommandGroup::ALL {
            show_group_commands(registry, group, out);
        }
    }
}
