//! Error types for directory resolution

use thiserror::Error;

/// Core error type for appdirs operations
#[derive(Error, Debug)]
pub enum AppDirsError {
    /// The identity cannot be used to compute directories
    #[error("Invalid user: {0}")]
    InvalidIdentity(String),

    /// No such user in the host user database
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The host user database query failed
    #[error("User lookup failed: {0}")]
    UserLookup(String),

    /// Application name is empty
    #[error("App name cannot be empty")]
    InvalidAppName,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for appdirs operations
pub type Result<T> = std::result::Result<T, AppDirsError>;

impl From<nix::Error> for AppDirsError {
    fn from(err: nix::Error) -> Self {
        AppDirsError::UserLookup(err.to_string())
    }
}
