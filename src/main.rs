//! Synchronizes local slash command definitions with Discord's guild and
//! global command registries.

mod client;
mod commands;
mod config;
mod error;
mod sync;

use anyhow::{Context, Result};
use tracing::{info, warn};

use client::DiscordRegistry;
use config::Config;
use sync::SyncPlan;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Loading commands from {}", config.commands_dir.display());

    // Any bad definition aborts before Discord is contacted
    let table = commands::load_commands(&config.commands_dir)
        .context("Failed to load command definitions")?;

    let registry = DiscordRegistry::new(&config.discord_token, config.application_id);
    let plan = SyncPlan::from(&config);

    let report = sync::run(&registry, &plan, &table).await?;

    info!("Sync finished after {} decisions: {}", report.decisions().len(), report);
    for failure in report.failures() {
        warn!(scope = %failure.scope, command = %failure.command, "Unresolved: {:?}", failure.outcome);
    }

    Ok(())
}
