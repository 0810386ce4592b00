//! Property table with typed lookups and lazily computed defaults.
use std::collections::BTreeMap;

use crate::lib::{errors::PropertyError, text};

pub mod host;
pub mod keys;
pub mod overlay;

pub use keys::{CatalogEntry, WellKnownKey};
pub use overlay::{resolve_overlay_path, CONFIG_ENV_KEY};

/// Key/value table of system properties.
///
/// The table is an ordinary value: seed it once at startup (see
/// [`PropertyTable::from_host`] and [`PropertyTable::bootstrap`]) and pass it
/// to whatever needs it. It performs no synchronization of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: BTreeMap<String, String>,
}

impl PropertyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from explicit entries.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// All entries, ordered by key.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Replace the whole table.
    pub fn replace(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl ToString,
    ) -> Result<Option<String>, PropertyError> {
        let key = key.into();
        ensure_key(&key)?;
        Ok(self.entries.insert(key, value.to_string()))
    }

    /// Remove `key`, returning the previous value.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>, PropertyError> {
        ensure_key(key)?;
        Ok(self.entries.remove(key))
    }

    /// Look up `key`. Empty values read as absent.
    pub fn get(&self, key: &str) -> Result<Option<&str>, PropertyError> {
        ensure_key(key)?;
        Ok(self.lookup(key))
    }

    /// Look up `key`, falling back to `default` when absent or empty.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str, PropertyError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Look up `key`, calling `default` only when the key is absent or empty.
    pub fn get_or_else<F>(&self, key: &str, default: F) -> Result<String, PropertyError>
    where
        F: FnOnce() -> String,
    {
        Ok(self.get(key)?.map_or_else(default, str::to_owned))
    }

    /// Parse `key` as a base-10 `i32`, calling `default` only when absent.
    ///
    /// Only ASCII digits with an optional leading sign are accepted.
    pub fn get_digit<F>(&self, key: &str, default: F) -> Result<i32, PropertyError>
    where
        F: FnOnce() -> i32,
    {
        match self.get(key)? {
            Some(value) => value
                .parse::<i32>()
                .map_err(|source| PropertyError::InvalidDigit {
                    key: key.to_string(),
                    value: value.to_string(),
                    source,
                }),
            None => Ok(default()),
        }
    }

    /// Read `key` as a boolean, calling `default` only when absent.
    ///
    /// Only `true` (in any ASCII case) reads as `true`; every other stored
    /// string reads as `false`.
    pub fn get_boolean<F>(&self, key: &str, default: F) -> Result<bool, PropertyError>
    where
        F: FnOnce() -> bool,
    {
        Ok(match self.get(key)? {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => default(),
        })
    }

    /// Look up a catalog key. Catalog keys are never blank, so this cannot fail.
    pub fn get_well_known(&self, key: WellKnownKey) -> Option<&str> {
        self.lookup(key.as_str())
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| text::not_empty(Some(*value)))
    }
}

fn ensure_key(key: &str) -> Result<(), PropertyError> {
    if text::is_blank(Some(key)) {
        return Err(PropertyError::blank_key(key));
    }
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for PropertyTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
