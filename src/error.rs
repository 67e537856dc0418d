//! Custom error types for tagnotes.

use std::time::Duration;
use thiserror::Error;

/// Main error type for tagnotes operations.
#[derive(Error, Debug)]
pub enum TagnotesError {
    // Git errors
    #[error("git is unavailable: {0}")]
    GitUnavailable(String),

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("git {command} timed out after {}s", .timeout.as_secs())]
    GitTimeout { command: String, timeout: Duration },

    // Version file errors
    #[error("Unable to determine current version in {0}")]
    VersionNotFound(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

}

/// Result type alias using TagnotesError
pub type Result<T> = std::result::Result<T, TagnotesError>;

impl TagnotesError {
    /// Create an unavailable git error
    pub fn git_unavailable(msg: impl Into<String>) -> Self {
        Self::GitUnavailable(msg.into())
    }

    /// Create a failed git command error
    pub fn git_failed(
        command: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether git itself can't be used, as opposed to a single query
    /// failing. Only this kind of failure is reported inline to the user.
    pub fn is_git_unavailable(&self) -> bool {
        matches!(self, Self::GitUnavailable(_))
    }
}
