//! Guild scope: replace the guild's whole command set with the local one.

use std::collections::HashSet;

use anyhow::Result;
use tracing::info;

use super::report::{Outcome, Scope, SyncReport};
use crate::client::CommandRegistry;
use crate::commands::CommandTable;

/// Bulk-replace a guild's commands with every command in `table`.
///
/// Each local command is reported as added or refreshed against the snapshot
/// taken before the replace. Remote commands missing from `table` are dropped
/// by Discord as part of the replace and are not reported.
pub async fn sync_guild<R>(
    registry: &R,
    guild_id: u64,
    table: &CommandTable,
    report: &mut SyncReport,
) -> Result<()>
where
    R: CommandRegistry + ?Sized,
{
    info!("Started refreshing application (/) commands.");

    let current = registry.guild_commands(guild_id).await?;
    let current_names: HashSet<&str> = current.iter().map(|cmd| cmd.name.as_str()).collect();

    let scope = Scope::Guild(guild_id);
    for command in table.iter() {
        let outcome = if current_names.contains(command.name.as_str()) {
            Outcome::Refreshed
        } else {
            Outcome::Added
        };
        report.record(scope, &command.name, outcome);
    }

    let registered = registry.set_guild_commands(guild_id, &table.payloads()).await?;

    info!(
        "Successfully reloaded application (/) commands. {} registered in guild {}",
        registered.len(),
        guild_id
    );
    Ok(())
}
