use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Failures raised by property lookups and updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    /// The key was empty or whitespace only.
    #[error("the key to access a system property is invalid: {key:?}")]
    BlankKey { key: String },
    /// The stored value is not a base-10 integer.
    #[error("system property `{key}` is not a valid integer ({value:?}): {source}")]
    InvalidDigit {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl PropertyError {
    pub fn blank_key(key: &str) -> Self {
        Self::BlankKey {
            key: key.to_string(),
        }
    }
}

/// Errors that can occur while loading a property overlay file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the overlay file.
    #[error("Failed to read property file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to parse the overlay as TOML.
    #[error("Failed to parse property file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// An entry cannot be represented as a property.
    #[error("Property file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: String,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap an I/O failure as a read failure.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap a TOML syntax error as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: toml::de::Error) -> Self {
        Self::Parse { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_digit_message_names_key_and_value() {
        let source = "abc".parse::<i32>().unwrap_err();
        let error = PropertyError::InvalidDigit {
            key: "n".into(),
            value: "abc".into(),
            source,
        };
        let message = error.to_string();
        assert!(message.contains("`n`"), "message: {message}");
        assert!(message.contains("\"abc\""), "message: {message}");
    }

    #[test]
    fn blank_key_keeps_offending_key() {
        assert_eq!(
            PropertyError::blank_key("  "),
            PropertyError::BlankKey { key: "  ".into() }
        );
    }
}
