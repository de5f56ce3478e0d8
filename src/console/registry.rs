//! Command registry
//!
//! Insertion-ordered set of command descriptors, keyed by case-insensitive
//! name. Append-only for the lifetime of the process: duplicate registration
//! is rejected, never overwritten, and there is no deregistration.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use super::error::{CommandError, RegisterError};
use super::output::ConsoleOutput;

/// Fixed set of categories used to organize commands for help listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    General,
    System,
    Peripherals,
    Network,
    Debug,
    Application,
    User,
}

impl CommandGroup {
    /// All groups in enumeration order, the order `help` lists them.
    pub const ALL: [CommandGroup; 7] = [
        CommandGroup::General,
        CommandGroup::System,
        CommandGroup::Peripherals,
        CommandGroup::Network,
        CommandGroup::Debug,
        CommandGroup::Application,
        CommandGroup::User,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::System => "System",
            Self::Peripherals => "Peripherals",
            Self::Network => "Network",
            Self::Debug => "Debug",
            Self::Application => "Application",
            Self::User => "User",
        }
    }
}

/// Capability a command handler provides: invoke with the full token
/// sequence (command name included as token 0) and an output sink.
///
/// Concrete handlers are small structs bound at registration time, often
/// wrapping a free function; no trait hierarchy per command is needed. The
/// registry is passed in so introspective commands (`help`) can enumerate
/// their peers.
pub trait CommandHandler {
    /// Run the command. A returned error is contained at the dispatch
    /// boundary and reported; it never unwinds the console loop.
    fn invoke(
        &self,
        args: &[&str],
        registry: &CommandRegistry,
        out: &mut dyn ConsoleOutput,
    ) -> Result<(), CommandError>;
}

/// Registered metadata plus handler for one command.
///
/// Argument counts include the command name itself as argument 0, so a
/// command taking no user arguments has `min_args == max_args == 1`.
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    /// Shown by help; when empty the bare name is shown instead.
    pub usage: String,
    pub group: CommandGroup,
    pub min_args: usize,
    pub max_args: usize,
    pub handler: Box<dyn CommandHandler>,
}

impl CommandDescriptor {
    /// Build a descriptor. Bounds are validated at registration, not here.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        group: CommandGroup,
        min_args: usize,
        max_args: usize,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
            group,
            min_args,
            max_args,
            handler: Box::new(handler),
        }
    }

    /// Usage string with the bare-name fallback applied.
    pub fn usage_or_name(&self) -> &str {
        if self.usage.is_empty() {
            &self.name
        } else {
            &self.usage
        }
    }
}

/// Insertion-ordered command registry.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    /// Register a command.
    ///
    /// Rejected (earlier registration wins, a warning is logged) when the
    /// name is empty, the name already exists in any case combination, or
    /// `min_args > max_args`.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), RegisterError> {
        if descriptor.name.is_empty() {
            warn!("command registration rejected: empty name");
            return Err(RegisterError::EmptyName);
        }
        if descriptor.min_args > descriptor.max_args {
            warn!(
                "command '{}' registration rejected: min_args {} > max_args {}",
                descriptor.name, descriptor.min_args, descriptor.max_args
            );
            return Err(RegisterError::InvalidBounds);
        }
        if self.find(&descriptor.name).is_some() {
            warn!("command '{}' already registered, keeping first", descriptor.name);
            return Err(RegisterError::DuplicateName);
        }
        self.commands.push(descriptor);
        Ok(())
    }

    /// Look up a command by name, case-insensitive.
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All commands in the given group, insertion order.
    pub fn list_by_group(
        &self,
        group: CommandGroup,
    ) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().filter(move |c| c.group == group)
    }

    /// All command names in insertion order (completion candidates).
    pub fn command_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.commands.iter().map(|c| c.name.as_str())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
