//! Recursive loader for `.json` command definition files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{CommandDescriptor, CommandTable};
use crate::error::LoadError;

const DEFINITION_EXTENSION: &str = "json";

/// The part of a definition this crate reads. Everything else is opaque.
#[derive(Debug, Deserialize)]
struct DefinitionHeader {
    name: String,
}

/// Load every command definition under `root`.
///
/// Directories are descended without a depth limit and visited in file name
/// order. Symlinked files are followed; files without a `.json` suffix are
/// skipped. A definition whose name
/// was already loaded replaces the earlier one.
pub fn load_commands(root: &Path) -> Result<CommandTable, LoadError> {
    let mut table = CommandTable::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // `Path::is_file` follows symlinks, unlike `entry.file_type()`
        if !path.is_file() || !is_definition(path) {
            continue;
        }

        let command = load_definition(path)?;
        debug!(command = %command.name, path = %path.display(), "Loaded command definition");

        if table.insert(command).is_some() {
            debug!(path = %path.display(), "Definition replaced an earlier command with the same name");
        }
    }

    if table.is_empty() {
        warn!("No command definitions found under {}", root.display());
    } else {
        info!("Loaded {} commands from {}", table.len(), root.display());
    }
    Ok(table)
}

fn is_definition(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DEFINITION_EXTENSION)
}

fn load_definition(path: &Path) -> Result<CommandDescriptor, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let payload: Value = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let missing_name = || LoadError::MissingName {
        path: path.to_path_buf(),
    };

    // A derived struct also accepts a JSON array, so require an object first
    if !payload.is_object() {
        return Err(missing_name());
    }
    let header = DefinitionHeader::deserialize(&payload).map_err(|_| missing_name())?;

    Ok(CommandDescriptor::new(header.name, payload))
}
