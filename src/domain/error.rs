use std::io;

use thiserror::Error;

/// Library-wide error type for tt-badger operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Workflow catalog cannot be addressed by single keystrokes.
    #[error("Invalid workflow catalog: {0}")]
    InvalidCatalog(String),

    /// No branch was given and none could be read.
    #[error("Branch name is required. Pass --branch or enter one when prompted.")]
    BranchRequired,

    /// External tool is not installed or not on PATH.
    #[error("{tool} CLI not found on PATH. Install it to dispatch workflows.")]
    ToolNotFound { tool: String },

    /// External tool is installed but not logged in.
    #[error("{tool} CLI is not authenticated: {details}")]
    ToolNotAuthenticated { tool: String, details: String },

    /// External tool ran and reported a failure.
    #[error("{tool}: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
