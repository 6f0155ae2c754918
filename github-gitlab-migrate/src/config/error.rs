//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential flag is missing or empty.
    #[error("Missing required credential: {name}")]
    MissingCredential { name: &'static str },

    /// No source namespace was configured.
    #[error("Missing space (source user or organization)")]
    MissingSpace,

    /// A configured endpoint is not a valid URL.
    #[error("Invalid endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },
}
