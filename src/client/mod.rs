//! HTTP client module for Discord command registry communication.

mod discord;
#[cfg(test)]
pub(crate) mod fake;

pub use discord::DiscordRegistry;

use anyhow::Result;
use serde_json::Value;
use serenity::async_trait;

/// A command as currently registered with Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub id: String,
    pub name: String,
}

impl RemoteCommand {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Operations on an application's command registry.
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// List the commands registered in a guild.
    async fn guild_commands(&self, guild_id: u64) -> Result<Vec<RemoteCommand>>;

    /// Replace a guild's entire command set. Commands not in `commands` are removed.
    async fn set_guild_commands(&self, guild_id: u64, commands: &[Value]) -> Result<Vec<RemoteCommand>>;

    /// List the global commands.
    async fn global_commands(&self) -> Result<Vec<RemoteCommand>>;

    /// Create a single global command.
    async fn create_global_command(&self, command: &Value) -> Result<RemoteCommand>;

    /// Delete a global command by ID.
    async fn delete_global_command(&self, command_id: &str) -> Result<()>;
}
