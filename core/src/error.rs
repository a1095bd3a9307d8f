//! Error types and handling for Scout Core

use thiserror::Error;

/// Result type alias for Scout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Scout Core
///
/// Searching never surfaces these: providers degrade to fewer results instead.
/// They are returned by setup-time operations (configuration, launching).
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Launch errors
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Search root does not exist: {path}")]
    RootNotFound { path: String },

    #[error("Search root is not a directory: {path}")]
    RootNotDirectory { path: String },
}

/// Errors raised while activating a result item
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("No program available to open {target}")]
    NoOpener { target: String },

    #[error("Could not launch '{target}': {message}")]
    CouldNotLaunch { target: String, message: String },

    #[error("Item not found: {id}")]
    ItemNotFound { id: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
