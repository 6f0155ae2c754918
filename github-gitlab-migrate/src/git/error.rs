//! Git invocation error types.

use thiserror::Error;

/// Errors raised by the `git` executable wrapper.
#[derive(Debug, Error)]
pub enum GitError {
    /// Cloning a repository failed.
    #[error("git clone failed: {message}")]
    CloneFailed { message: String },

    /// Updating an existing clone failed.
    #[error("git pull failed: {message}")]
    PullFailed { message: String },

    /// Pushing refs to a remote failed.
    #[error("git push failed: {message}")]
    PushFailed { message: String },

    /// Any other git command failed.
    #[error("git {command} failed: {message}")]
    CommandFailed { command: String, message: String },
}
