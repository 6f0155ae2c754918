//! Per-repository result types.

use crate::issues::IssueReport;
use crate::wiki::WikiStatus;

/// What a completed repository migration produced.
#[derive(Debug, Clone)]
pub struct RepositoryReport {
    /// Source repository name.
    pub repository: String,

    /// Web URL of the created destination project.
    pub project_url: String,

    /// Issue translation counts.
    pub issues: IssueReport,

    /// Wiki transfer outcome.
    pub wiki: WikiStatus,
}

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum RepositoryResult {
    /// The repository was migrated.
    Migrated {
        /// What the migration produced.
        report: RepositoryReport,
    },

    /// The repository was skipped.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },

    /// The migration failed; later repositories are unaffected.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}
