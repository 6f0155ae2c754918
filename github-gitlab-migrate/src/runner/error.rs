//! Runner error types.

use thiserror::Error;

/// Fatal errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration validation failed before any network activity.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Source platform client failure (construction or repository listing).
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    /// Destination platform client could not be constructed.
    #[error(transparent)]
    Api(#[from] crate::destination::RemoteApiError),

    /// Wiki provisioner could not be constructed.
    #[error(transparent)]
    Wiki(#[from] crate::wiki::WikiError),

    /// The workspace directory tree could not be allocated.
    #[error("failed to allocate workspace: {0}")]
    Workspace(#[from] std::io::Error),
}

/// Errors captured by the per-repository migration boundary.
///
/// One repository failing with any of these never aborts the batch; the
/// runner records the failure and moves on.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Local clone, pull or push failure.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// The destination rejected a create, list or transfer call.
    #[error(transparent)]
    Api(#[from] crate::destination::RemoteApiError),

    /// The source issue listing failed.
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),
}
