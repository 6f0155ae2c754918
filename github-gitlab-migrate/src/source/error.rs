//! Source platform error types.

use thiserror::Error;

/// Errors raised by the source platform client.
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API returned a repository without a field the migration needs.
    #[error("Repository '{repo}' is missing required field '{field}'")]
    MissingField { repo: String, field: &'static str },

    /// A qualified repository name was not in `owner/name` form.
    #[error("Invalid qualified repository name: '{full_name}'")]
    InvalidFullName { full_name: String },
}
