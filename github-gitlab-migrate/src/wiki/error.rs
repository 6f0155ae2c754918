//! Wiki transfer error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during the wiki transfer.
///
/// These never propagate out of the wiki step; the transferer maps them onto
/// a [`WikiStatus`][`super::WikiStatus`].
#[derive(Debug, Error)]
pub enum WikiError {
    /// Wiki clone or push failure.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// Transport-level failure during provisioning.
    #[error("network error during wiki provisioning: {0}")]
    Network(#[from] reqwest::Error),

    /// The provisioning page visit was rejected.
    #[error("wiki provisioning returned HTTP {status}")]
    Provision { status: StatusCode },
}
