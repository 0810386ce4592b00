use anyhow::Result;
use serde_json::Value;

use crate::common::{fixture, run_cli, run_cli_with_env, stdout};

#[test]
fn get_prints_overlay_value() -> Result<()> {
    let config = fixture("tests/fixtures/overlay_valid.toml");
    let output = run_cli(&[
        "--config",
        config.to_str().expect("utf-8 fixture path"),
        "get",
        "java.version",
    ])?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout(&output), "21.0.1");
    Ok(())
}

#[test]
fn overlay_path_is_read_from_environment() -> Result<()> {
    let config = fixture("tests/fixtures/overlay_valid.toml");
    let output = run_cli_with_env(&["get", "app.workers", "--as", "int"], &config)?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout(&output), "8");
    Ok(())
}

#[test]
fn get_falls_back_to_default() -> Result<()> {
    let output = run_cli(&["get", "no.such.key", "--default", "fallback"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "fallback");
    Ok(())
}

#[test]
fn blank_key_exits_with_failure() -> Result<()> {
    let output = run_cli(&["get", " "])?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn invalid_overlay_exits_with_failure() -> Result<()> {
    let config = fixture("tests/fixtures/overlay_array.toml");
    let output = run_cli_with_env(&["list"], &config)?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn list_includes_host_separators() -> Result<()> {
    let output = run_cli(&["list"])?;
    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert!(parsed.get("file.separator").is_some(), "list: {parsed}");
    assert!(parsed.get("os.name").is_some(), "list: {parsed}");
    Ok(())
}

#[test]
fn keys_prints_catalog() -> Result<()> {
    let output = run_cli(&["keys"])?;
    assert!(output.status.success());
    let parsed: Vec<Value> = serde_json::from_str(&stdout(&output))?;
    assert!(parsed.iter().any(|entry| entry["key"] == "user.home"));
    Ok(())
}
