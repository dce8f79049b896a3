use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "concord", about = "Encode and decode UserDetails wire records")]
pub struct Cli {
    /// Path to TOML config file
    #[arg(long, global = true, env = "CONCORD_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the wire form of a record built from flags
    Encode(EncodeArgs),
    /// Read a wire-form array and print the record
    Decode(DecodeArgs),
    /// Print the positional schema
    Schema,
}

#[derive(Args, Clone, Debug)]
pub struct EncodeArgs {
    /// Omit to leave the field absent
    #[arg(long)]
    pub name: Option<String>,
    /// Omit to leave the field absent
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct DecodeArgs {
    /// Input file; stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

// ---- TOML Config ----

#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// Fallback for `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_owned()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { pretty: false, log_filter: default_log_filter() }
    }
}

impl CliConfig {
    /// No path → defaults. A given path must exist and parse.
    pub fn load(path: Option<&str>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|e| CliError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = CliConfig::parse("pretty = true").unwrap();
        assert!(config.pretty);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unreadable_file_is_config_error() {
        let err = CliConfig::load(Some("/nonexistent/concord.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config { context: "read", .. }));
    }

    #[test]
    fn bad_toml_is_config_error() {
        let path = std::env::temp_dir().join(format!("concord-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "pretty = \"sometimes\"").unwrap();
        let err = CliConfig::load(path.to_str()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, CliError::Config { context: "parse", .. }));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn encode_flags_are_optional() {
        let cli = Cli::try_parse_from(["concord", "encode", "--name", "Ada"]).unwrap();
        let Commands::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(args.name.as_deref(), Some("Ada"));
        assert_eq!(args.email, None);
    }
}
