//! Merge properties from a configuration file over a table.
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use toml::{Table, Value};
use tracing::{debug, error, info};

use crate::lib::errors::ConfigError;

use super::PropertyTable;

pub const CONFIG_ENV_KEY: &str = "SYSPROPS_CONFIG_PATH";

impl PropertyTable {
    /// Seed from the host, then apply the overlay named by `override_path`
    /// or, failing that, by `SYSPROPS_CONFIG_PATH`.
    pub fn bootstrap(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut table = Self::from_host();
        if let Some(path) = resolve_overlay_path(override_path, env::var(CONFIG_ENV_KEY).ok()) {
            table.load_overlay(path)?;
        }
        Ok(table)
    }

    /// Read `path` and store every entry in the table, overwriting existing
    /// keys. Nested tables become dotted keys. Returns the number of entries applied.
    pub fn load_overlay(&mut self, path: impl Into<PathBuf>) -> Result<usize, ConfigError> {
        let path = path.into();
        info!(
            target: "sysprops::config",
            path = %path.display(),
            "Starting property overlay load"
        );

        let contents = fs::read_to_string(&path).map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "sysprops::config",
                path = %path.display(),
                reason = %error,
                "Failed to read property file"
            );
            error
        })?;

        let raw: Table = toml::from_str(&contents).map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "sysprops::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse property file"
            );
            error
        })?;

        let mut flattened = BTreeMap::new();
        for (key, value) in raw {
            flatten_into(&mut flattened, key, value, &path).map_err(|err| {
                error!(
                    target: "sysprops::config",
                    path = %path.display(),
                    reason = %err,
                    "Failed to validate property file"
                );
                err
            })?;
        }

        let applied = flattened.len();
        self.entries.extend(flattened);
        info!(
            target: "sysprops::config",
            path = %path.display(),
            applied,
            total = self.entries.len(),
            "Property overlay loaded successfully"
        );
        Ok(applied)
    }
}

/// Pick the overlay path: explicit override first, then a non-blank env value.
pub fn resolve_overlay_path(
    override_path: Option<PathBuf>,
    env_value: Option<String>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => {
            info!(
                target: "sysprops::config",
                path = %value,
                "Loading property overlay using SYSPROPS_CONFIG_PATH environment variable"
            );
            Some(PathBuf::from(value))
        }
        _ => {
            debug!(
                target: "sysprops::config",
                env = CONFIG_ENV_KEY,
                "SYSPROPS_CONFIG_PATH not set; using host properties only"
            );
            None
        }
    }
}

/// Keys are kept verbatim: no case folding, and quoted keys such as
/// `"list[0]"` or `"os.name"` are stored as written.
fn flatten_into(
    out: &mut BTreeMap<String, String>,
    key: String,
    value: Value,
    path: &Path,
) -> Result<(), ConfigError> {
    let rendered = match value {
        Value::Table(table) => {
            for (child, value) in table {
                flatten_into(out, format!("{key}.{child}"), value, path)?;
            }
            return Ok(());
        }
        Value::Array(_) => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: key,
                message: "arrays cannot be stored as properties".into(),
            })
        }
        Value::String(value) => value,
        Value::Integer(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::Boolean(value) => value.to_string(),
        Value::Datetime(value) => value.to_string(),
    };
    out.insert(key, rendered);
    Ok(())
}
