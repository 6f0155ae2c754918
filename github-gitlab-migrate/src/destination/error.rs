//! Destination platform error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the destination platform client.
#[derive(Debug, Error)]
pub enum RemoteApiError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured token was rejected.
    #[error("authentication failed: invalid GitLab token")]
    AuthenticationFailed,

    /// The API rejected the call.
    #[error("GitLab API error ({status}): {body}")]
    Api { status: StatusCode, body: String },
}
