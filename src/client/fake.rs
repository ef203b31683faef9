//! In-memory registry that records every call, for tests.

use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use serde_json::Value;
use serenity::async_trait;

use super::{CommandRegistry, RemoteCommand};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListGuild(u64),
    SetGuild(u64, Vec<Value>),
    ListGlobal,
    CreateGlobal(Value),
    DeleteGlobal(String),
}

#[derive(Default)]
pub struct FakeRegistry {
    pub guild: Vec<RemoteCommand>,
    pub global: Vec<RemoteCommand>,
    pub fail_list_guild: bool,
    pub fail_set_guild: bool,
    pub fail_list_global: bool,
    /// Command names whose creation fails.
    pub fail_create: HashSet<String>,
    /// Command IDs whose deletion fails.
    pub fail_delete: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CommandRegistry for FakeRegistry {
    async fn guild_commands(&self, guild_id: u64) -> Result<Vec<RemoteCommand>> {
        self.record(Call::ListGuild(guild_id));
        if self.fail_list_guild {
            anyhow::bail!("guild list unavailable");
        }
        Ok(self.guild.clone())
    }

    async fn set_guild_commands(&self, guild_id: u64, commands: &[Value]) -> Result<Vec<RemoteCommand>> {
        self.record(Call::SetGuild(guild_id, commands.to_vec()));
        if self.fail_set_guild {
            anyhow::bail!("bulk replace rejected");
        }
        Ok(commands
            .iter()
            .enumerate()
            .map(|(i, cmd)| RemoteCommand::new(i.to_string(), cmd["name"].as_str().unwrap_or_default()))
            .collect())
    }

    async fn global_commands(&self) -> Result<Vec<RemoteCommand>> {
        self.record(Call::ListGlobal);
        if self.fail_list_global {
            anyhow::bail!("global list unavailable");
        }
        Ok(self.global.clone())
    }

    async fn create_global_command(&self, command: &Value) -> Result<RemoteCommand> {
        self.record(Call::CreateGlobal(command.clone()));
        let name = command["name"].as_str().unwrap_or_default();
        if self.fail_create.contains(name) {
            anyhow::bail!("create rejected for {}", name);
        }
        Ok(RemoteCommand::new("999", name))
    }

    async fn delete_global_command(&self, command_id: &str) -> Result<()> {
        self.record(Call::DeleteGlobal(command_id.to_string()));
        if self.fail_delete.contains(command_id) {
            anyhow::bail!("unknown command {}", command_id);
        }
        Ok(())
    }
}
