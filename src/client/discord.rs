//! Command registry backed by serenity's REST client.

use anyhow::{Context, Result};
use serde_json::Value;
use serenity::all::{ApplicationId, Command, CommandId, GuildId};
use serenity::async_trait;
use serenity::http::Http;

use super::{CommandRegistry, RemoteCommand};

/// Discord REST client scoped to one application.
pub struct DiscordRegistry {
    http: Http,
}

impl DiscordRegistry {
    /// Create a new client. `application_id` must be non-zero.
    pub fn new(token: &str, application_id: u64) -> Self {
        let http = Http::new(token);
        http.set_application_id(ApplicationId::new(application_id));
        Self { http }
    }
}

fn to_remote(commands: Vec<Command>) -> Vec<RemoteCommand> {
    commands.into_iter().map(RemoteCommand::from).collect()
}

impl From<Command> for RemoteCommand {
    fn from(command: Command) -> Self {
        Self::new(command.id.to_string(), command.name)
    }
}

fn parse_command_id(command_id: &str) -> Result<CommandId> {
    let id: u64 = command_id
        .trim()
        .parse()
        .with_context(|| format!("Invalid command ID: {:?}", command_id))?;

    if id == 0 {
        anyhow::bail!("Invalid command ID: 0");
    }

    Ok(CommandId::new(id))
}

#[async_trait]
impl CommandRegistry for DiscordRegistry {
    async fn guild_commands(&self, guild_id: u64) -> Result<Vec<RemoteCommand>> {
        let commands = self
            .http
            .get_guild_commands(GuildId::new(guild_id))
            .await
            .context("Failed to list guild commands")?;

        Ok(to_remote(commands))
    }

    async fn set_guild_commands(&self, guild_id: u64, commands: &[Value]) -> Result<Vec<RemoteCommand>> {
        let commands = self
            .http
            .create_guild_commands(GuildId::new(guild_id), &commands)
            .await
            .context("Failed to replace guild commands")?;

        Ok(to_remote(commands))
    }

    async fn global_commands(&self) -> Result<Vec<RemoteCommand>> {
        let commands = self
            .http
            .get_global_commands()
            .await
            .context("Failed to list global commands")?;

        Ok(to_remote(commands))
    }

    async fn create_global_command(&self, command: &Value) -> Result<RemoteCommand> {
        let created = self
            .http
            .create_global_command(command)
            .await
            .context("Failed to create global command")?;

        Ok(created.into())
    }

    async fn delete_global_command(&self, command_id: &str) -> Result<()> {
        let id = parse_command_id(command_id)?;

        self.http
            .delete_global_command(id)
            .await
            .context("Failed to delete global command")
    }
}
