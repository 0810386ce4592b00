//! CLI argument definitions.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Inspect host system properties",
    long_about = None
)]
pub struct CliArgs {
    /// Property file merged over the host properties (overrides SYSPROPS_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the value of a single property.
    Get(GetArgs),
    /// Print every property in the table.
    List(ListArgs),
    /// Print the catalog of well-known keys.
    Keys,
}

/// Arguments for `get`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "Hint: `sysprops get os.name --default unknown` prints `unknown` when the property is unset."
)]
pub struct GetArgs {
    /// Property key, e.g. `os.name`.
    pub key: String,
    /// Value used when the property is absent or empty.
    #[arg(long)]
    pub default: Option<String>,
    /// How to interpret the stored value.
    #[arg(long = "as", value_enum, default_value_t = ValueType::Text)]
    pub value_type: ValueType,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Interpretation applied by `get`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ValueType {
    #[value(name = "string")]
    Text,
    Int,
    Bool,
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}
