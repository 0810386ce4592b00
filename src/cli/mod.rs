//! CLI command execution over a seeded property table.
use anyhow::{anyhow, Context, Result};

use crate::props::{CatalogEntry, PropertyTable, WellKnownKey};

pub mod args;
pub mod exit;

pub use args::{CliArgs, CliCommand, GetArgs, ListArgs, OutputFormat, ValueType};
pub use exit::RuntimeExit;

/// Seed the table, apply any overlay, and run the requested command.
pub fn run(args: CliArgs) -> Result<String> {
    let table = PropertyTable::bootstrap(args.config_override)?;
    execute_cli_command(&args.command, &table)
}

/// Execute a command against `table` and return the text to print.
pub fn execute_cli_command(command: &CliCommand, table: &PropertyTable) -> Result<String> {
    match command {
        CliCommand::Get(args) => get_property(args, table),
        CliCommand::List(args) => list_properties(args.format, table),
        CliCommand::Keys => {
            let catalog: Vec<CatalogEntry> = WellKnownKey::ALL
                .iter()
                .map(WellKnownKey::catalog_entry)
                .collect();
            Ok(serde_json::to_string_pretty(&catalog)?)
        }
    }
}

fn get_property(args: &GetArgs, table: &PropertyTable) -> Result<String> {
    let key = args.key.as_str();
    match args.value_type {
        ValueType::Text => {
            let value = table.get_or_else(key, || args.default.clone().unwrap_or_default())?;
            Ok(value)
        }
        ValueType::Int => {
            let fallback = args
                .default
                .as_deref()
                .map(|raw| {
                    raw.parse::<i32>()
                        .with_context(|| format!("--default `{raw}` is not a valid integer"))
                })
                .transpose()?;
            let mut missed = false;
            let value = table.get_digit(key, || {
                missed = true;
                fallback.unwrap_or_default()
            })?;
            if missed && fallback.is_none() {
                return Err(not_set(key));
            }
            Ok(value.to_string())
        }
        ValueType::Bool => {
            let fallback = args.default.as_deref().map(parse_bool_default).transpose()?;
            let mut missed = false;
            let value = table.get_boolean(key, || {
                missed = true;
                fallback.unwrap_or_default()
            })?;
            if missed && fallback.is_none() {
                return Err(not_set(key));
            }
            Ok(value.to_string())
        }
    }
}

fn list_properties(format: OutputFormat, table: &PropertyTable) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table.entries())?),
        OutputFormat::Toml => {
            toml::to_string(table.entries()).context("failed to render properties as TOML")
        }
    }
}

fn parse_bool_default(raw: &str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(anyhow!("--default `{raw}` is not a valid boolean (expected true or false)"))
    }
}

fn not_set(key: &str) -> anyhow::Error {
    anyhow!("property `{key}` is not set and no --default was given")
}
