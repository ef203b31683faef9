//! Global scope: add allow-listed commands, delete deny-listed IDs.

use std::collections::HashSet;

use anyhow::Result;

use super::report::{Outcome, Scope, SyncReport};
use crate::client::CommandRegistry;
use crate::commands::CommandTable;

/// Apply the global allow-list and deny-list.
///
/// Only a failure to list the current global commands is returned as an
/// error. Each create and delete fails independently and is reported.
pub async fn sync_global<R>(
    registry: &R,
    table: &CommandTable,
    add_names: &[String],
    remove_ids: &[String],
    report: &mut SyncReport,
) -> Result<()>
where
    R: CommandRegistry + ?Sized,
{
    let existing = registry.global_commands().await?;
    let existing_names: HashSet<&str> = existing.iter().map(|cmd| cmd.name.as_str()).collect();

    for name in add_names {
        let Some(command) = table.get(name) else {
            report.record(Scope::Global, name, Outcome::NotFound);
            continue;
        };

        // Existing global commands are left untouched.
        if existing_names.contains(name.as_str()) {
            report.record(Scope::Global, name, Outcome::Refreshed);
            continue;
        }

        let outcome = match registry.create_global_command(&command.payload).await {
            Ok(_) => Outcome::Added,
            Err(e) => Outcome::Failed(format!("{:#}", e)),
        };
        report.record(Scope::Global, name, outcome);
    }

    for command_id in remove_ids {
        let outcome = match registry.delete_global_command(command_id).await {
            Ok(()) => Outcome::Removed,
            Err(e) => Outcome::Failed(format!("{:#}", e)),
        };
        report.record(Scope::Global, command_id, outcome);
    }

    Ok(())
}
