//! Reconciliation of local commands against Discord's registries.

mod global;
mod guild;
mod report;

pub use global::sync_global;
pub use guild::sync_guild;
pub use report::{Outcome, Scope, SyncReport};

use anyhow::Result;
use tracing::error;

use crate::client::CommandRegistry;
use crate::commands::CommandTable;
use crate::config::Config;

/// Subject of the decision recorded when the guild block fails as a whole.
const GUILD_SYNC_SUBJECT: &str = "(guild sync)";

/// What one run should do, independent of where the commands came from.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub guild_id: u64,
    pub add_global_names: Vec<String>,
    pub remove_global_ids: Vec<String>,
}

impl From<&Config> for SyncPlan {
    fn from(config: &Config) -> Self {
        Self {
            guild_id: config.guild_id,
            add_global_names: config.add_global_names.clone(),
            remove_global_ids: config.remove_global_ids.clone(),
        }
    }
}

/// Sync the guild, then the global registry.
///
/// A guild failure is logged and the run continues. A failure to list the
/// global commands ends the run with an error.
pub async fn run<R>(registry: &R, plan: &SyncPlan, table: &CommandTable) -> Result<SyncReport>
where
    R: CommandRegistry + ?Sized,
{
    let mut report = SyncReport::new();

    if let Err(e) = sync_guild(registry, plan.guild_id, table, &mut report).await {
        error!("Guild command sync failed: {:#}", e);
        report.record(
            Scope::Guild(plan.guild_id),
            GUILD_SYNC_SUBJECT,
            Outcome::Failed(format!("{:#}", e)),
        );
    }

    sync_global(
        registry,
        table,
        &plan.add_global_names,
        &plan.remove_global_ids,
        &mut report,
    )
    .await?;

    Ok(report)
}
