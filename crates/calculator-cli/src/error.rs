//! Error types for the CLI

use calculator_brain::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A press the keypad rejected
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl CliError {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Calc(_) => 2,
            Self::Io(_) | Self::Json(_) | Self::Logging(_) => 1,
        }
    }
}
