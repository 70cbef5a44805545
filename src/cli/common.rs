//! Shared CLI error and result types.

use std::fmt;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Failure kind of a CLI command, mapped to a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Configuration is malformed or violates a generation invariant
    Validation(String),
    /// File could not be read, written, or parsed
    Io(String),
    /// Bad command-line usage (conflicting or missing arguments)
    Usage(String),
}

impl CliError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Convenience constructor for I/O failures.
    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }

    /// Convenience constructor for usage failures.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Process exit code for this failure kind.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 1,
            CliError::Io(_) => 2,
            CliError::Usage(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Validation(msg) | CliError::Io(msg) | CliError::Usage(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl std::error::Error for CliError {}
