//! Process exit reporting for the binary.
use std::process::ExitCode;

use anyhow::Error;

/// Bundles a failure message with the exit code to report.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Print the message to stderr and hand back the exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use crate::lib::errors::PropertyError;

    use super::RuntimeExit;

    #[test]
    fn message_includes_error_chain() {
        let source = "x".parse::<i32>().unwrap_err();
        let exit = RuntimeExit::from_error(PropertyError::InvalidDigit {
            key: "n".into(),
            value: "x".into(),
            source,
        });
        assert!(exit.message().contains("`n`"), "{}", exit.message());
    }
}
