//! Configuration management for the command sync tool.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,

    /// Discord application (client) ID owning the commands
    pub application_id: u64,

    /// Discord guild ID whose command set is replaced
    pub guild_id: u64,

    /// Command names to ensure are registered globally
    pub add_global_names: Vec<String>,

    /// Global command IDs to delete
    pub remove_global_ids: Vec<String>,

    /// Root of the command definition tree
    pub commands_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any variable source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN environment variable not set")?;

        let application_id = parse_id(
            "DISCORD_APPLICATION_ID",
            &var("DISCORD_APPLICATION_ID")
                .context("DISCORD_APPLICATION_ID environment variable not set")?,
        )?;

        let guild_id = parse_id(
            "DISCORD_GUILD_ID",
            &var("DISCORD_GUILD_ID")
                .context("DISCORD_GUILD_ID environment variable not set")?,
        )?;

        let add_global_names = var("ADD_GLOBAL_NAMES")
            .map(|s| parse_list(&s))
            .unwrap_or_default();

        let remove_global_ids = var("REMOVE_GLOBAL_IDS")
            .map(|s| parse_list(&s))
            .unwrap_or_default();

        let commands_dir = var("COMMANDS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("commands"));

        let log_level = var("RUST_LOG")
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
            add_global_names,
            remove_global_ids,
            commands_dir,
            log_level,
        })
    }
}

/// Parse a Discord snowflake. Zero is not a valid ID.
fn parse_id(var: &str, value: &str) -> Result<u64> {
    let id: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} is not a valid ID: {:?}", var, value))?;

    if id == 0 {
        anyhow::bail!("{} must be non-zero", var);
    }

    Ok(id)
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DISCORD_TOKEN", "secret"),
        ("DISCORD_APPLICATION_ID", "111"),
        ("DISCORD_GUILD_ID", "222"),
    ];

    #[test]
    fn required_only_uses_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.discord_token, "secret");
        assert_eq!(config.application_id, 111);
        assert_eq!(config.guild_id, 222);
        assert!(config.add_global_names.is_empty());
        assert!(config.remove_global_ids.is_empty());
        assert_eq!(config.commands_dir, PathBuf::from("commands"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn optional_variables_are_read() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("ADD_GLOBAL_NAMES", "ping, status"),
            ("REMOVE_GLOBAL_IDS", "900,,901"),
            ("COMMANDS_DIR", "defs/slash"),
            ("RUST_LOG", "debug"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.add_global_names, ["ping", "status"]);
        assert_eq!(config.remove_global_ids, ["900", "901"]);
        assert_eq!(config.commands_dir, PathBuf::from("defs/slash"));
        assert_eq!(config.log_level, "debug");
    }

    #[test_case("DISCORD_TOKEN"; "when token missing")]
    #[test_case("DISCORD_APPLICATION_ID"; "when application id missing")]
    #[test_case("DISCORD_GUILD_ID"; "when guild id missing")]
    fn missing_required_variable_is_an_error(missing: &str) {
        let vars: Vec<_> = REQUIRED.iter().copied().filter(|(k, _)| *k != missing).collect();

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();

        assert!(err.to_string().contains(missing));
    }

    #[test]
    fn zero_guild_id_is_an_error() {
        let mut vars = REQUIRED.to_vec();
        vars[2] = ("DISCORD_GUILD_ID", "0");

        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }

    #[test_case("", &[]; "when empty")]
    #[test_case("ping", &["ping"]; "when single entry")]
    #[test_case("ping,status", &["ping", "status"]; "when two entries")]
    #[test_case(" ping , status ", &["ping", "status"]; "when padded with spaces")]
    #[test_case("a, b", &["a", "b"]; "when space follows the comma")]
    #[test_case("ping,,status,", &["ping", "status"]; "when with blank entries")]
    fn parse_list_tests(input: &str, expected: &[&str]) {
        assert_eq!(parse_list(input), expected);
    }

    #[test_case("123456789012345678", Some(123456789012345678); "when valid snowflake")]
    #[test_case(" 42 ", Some(42); "when padded")]
    #[test_case("0", None; "when zero")]
    #[test_case("abc", None; "when not numeric")]
    #[test_case("", None; "when empty")]
    fn parse_id_tests(input: &str, expected: Option<u64>) {
        assert_eq!(parse_id("TEST_ID", input).ok(), expected);
    }
}
