use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_sysprops");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Run the binary with logging silenced and no inherited overlay.
pub fn run_cli(args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("SYSPROPS_CONFIG_PATH")
        .output()
        .context("failed to run sysprops binary")
}

pub fn run_cli_with_env(args: &[&str], config_path: &Path) -> Result<Output> {
    Command::new(BINARY_PATH)
        .args(args)
        .env("RUST_LOG", "off")
        .env("SYSPROPS_CONFIG_PATH", config_path)
        .output()
        .context("failed to run sysprops binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
