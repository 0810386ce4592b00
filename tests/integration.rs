#[path = "integration/common.rs"]
mod common;

#[path = "integration/property_store.rs"]
mod property_store;

#[path = "integration/cli_commands.rs"]
mod cli_commands;
