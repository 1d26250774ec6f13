use thiserror::Error;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid release type: {0}")]
    InvalidReleaseType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command failed with exit code {code}: {command}")]
    Command {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidVersion(msg.into())
    }

    /// Create an invalid-release-type error with context
    pub fn invalid_release_type(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidReleaseType(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Exit code the process should report for this error.
    ///
    /// Failed child commands propagate their own exit code to the caller;
    /// everything else maps to 1. The actual `process::exit` call belongs to
    /// the CLI entry point, never to library code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::Command { code, .. } => *code,
            _ => 1,
        }
    }
}
