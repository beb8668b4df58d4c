//! Error types for conflict-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort the whole run
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from conflict-core
    #[error(transparent)]
    Core(#[from] conflict_core::Error),

    /// Report serialization error
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognised `--log` value
    #[error("Invalid log level: {value} (expected CRITICAL, ERROR, WARNING, INFO or DEBUG)")]
    InvalidLogLevel { value: String },

    /// The tracing subscriber could not be installed
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}
