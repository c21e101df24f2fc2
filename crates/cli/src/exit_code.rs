//! Exit codes for the SPARQL CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use sparql_config::ConfigError;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no lint errors (warnings allowed)
    Success = 0,
    /// Lint errors found in at least one query
    LintError = 1,
    /// Configuration error (missing or invalid config file, bad rule override)
    ConfigError = 2,
    /// I/O error (file read/write failure, file watcher failure)
    IoError = 4,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Pick the exit code for a failed command from its error chain.
    ///
    /// Anything that is not a configuration problem came from the
    /// filesystem or the watcher and maps to [`ExitCode::IoError`].
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(config_error) = cause.downcast_ref::<ConfigError>() {
                return match config_error {
                    ConfigError::Io(_) => Self::IoError,
                    _ => Self::ConfigError,
                };
            }
        }
        Self::IoError
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::LintError => write!(f, "lint error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::LintError.code(), 1);
        assert_eq!(ExitCode::ConfigError.code(), 2);
        assert_eq!(ExitCode::IoError.code(), 4);
    }

    #[test]
    fn test_config_errors_map_to_config_code() {
        let error = anyhow::Error::new(ConfigError::NotFound(PathBuf::from(".sparqlrc.yml")))
            .context("Failed to load config");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ConfigError);

        let error = anyhow::Error::new(ConfigError::Invalid {
            path: PathBuf::from("--rule"),
            message: "unknown rule".to_string(),
        });
        assert_eq!(ExitCode::for_error(&error), ExitCode::ConfigError);
    }

    #[test]
    fn test_read_errors_map_to_io_code() {
        let error = std::fs::read_to_string("/definitely/not/here.rq")
            .context("Failed to read /definitely/not/here.rq")
            .unwrap_err();
        assert_eq!(ExitCode::for_error(&error), ExitCode::IoError);

        let error = anyhow::Error::new(ConfigError::Io(std::io::Error::other("disk")));
        assert_eq!(ExitCode::for_error(&error), ExitCode::IoError);
    }
}
