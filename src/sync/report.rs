//! Per-command sync decisions and their log output.

use std::fmt;

use tracing::{error, info};

/// Which registry a decision applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Guild(u64),
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Guild(id) => write!(f, "guild {}", id),
            Scope::Global => write!(f, "global"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Refreshed,
    Removed,
    NotFound,
    Failed(String),
}

/// One logged decision about a command name or ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub scope: Scope,
    pub command: String,
    pub outcome: Outcome,
}

/// Everything decided during a run, in the order it happened.
#[derive(Debug, Default)]
pub struct SyncReport {
    decisions: Vec<Decision>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a decision and keep it.
    pub fn record(&mut self, scope: Scope, command: impl Into<String>, outcome: Outcome) {
        let command = command.into();
        let scope_label = scope.to_string();

        match (&scope, &outcome) {
            (Scope::Guild(_), Outcome::Added) => {
                info!(scope = %scope_label, command = %command, "Added new command \"{}\" to {}", command, scope_label)
            }
            (Scope::Guild(_), Outcome::Refreshed) => {
                info!(scope = %scope_label, command = %command, "Refreshed command \"{}\" in {}", command, scope_label)
            }
            (_, Outcome::Added) => {
                info!(scope = %scope_label, command = %command, "Successfully added global command: {}", command)
            }
            (_, Outcome::Refreshed) => {
                info!(scope = %scope_label, command = %command, "Global command \"{}\" already exists and is now refreshed", command)
            }
            (_, Outcome::Removed) => {
                info!(scope = %scope_label, command = %command, "Successfully removed command ID: {}", command)
            }
            (_, Outcome::NotFound) => {
                error!(scope = %scope_label, command = %command, "Command {} not found", command)
            }
            (_, Outcome::Failed(reason)) => {
                error!(scope = %scope_label, command = %command, "Failed to sync {}: {}", command, reason)
            }
        }

        self.decisions.push(Decision {
            scope,
            command,
            outcome,
        });
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Decisions that ended in `NotFound` or `Failed`.
    pub fn failures(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| matches!(d.outcome, Outcome::NotFound | Outcome::Failed(_)))
    }

    pub fn count(&self, outcome: fn(&Outcome) -> bool) -> usize {
        self.decisions.iter().filter(|d| outcome(&d.outcome)).count()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} refreshed, {} removed, {} failed",
            self.count(|o| *o == Outcome::Added),
            self.count(|o| *o == Outcome::Refreshed),
            self.count(|o| *o == Outcome::Removed),
            self.failures().count(),
        )
    }
}
