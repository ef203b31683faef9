//! Local slash command definitions.

mod loader;

pub use loader::load_commands;

use std::collections::BTreeMap;

use serde_json::Value;

/// A single command definition as read from disk.
///
/// The payload is the full definition document and is sent to Discord
/// unmodified; only `name` is interpreted here.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDescriptor {
    pub name: String,
    pub payload: Value,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Name-keyed table of command definitions for one run.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: BTreeMap<String, CommandDescriptor>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning the one it replaced if the name was taken.
    pub fn insert(&mut self, command: CommandDescriptor) -> Option<CommandDescriptor> {
        self.commands.insert(command.name.clone(), command)
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    /// Flatten into the request body for a bulk replace, in iteration order.
    pub fn payloads(&self) -> Vec<Value> {
        self.iter().map(|cmd| cmd.payload.clone()).collect()
    }
}
