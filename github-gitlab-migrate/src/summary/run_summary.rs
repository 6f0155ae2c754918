//! Run summary types.

use super::result::RepositoryResult;
use crate::wiki::WikiStatus;

/// Summary of a complete migration run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories found in the source space.
    pub repositories_discovered: usize,

    /// Number of repositories migrated.
    pub repositories_migrated: usize,

    /// Number of repositories skipped by the filter.
    pub repositories_skipped: usize,

    /// Number of repositories whose migration failed.
    pub repositories_failed: usize,

    /// Number of issues created on the destination.
    pub issues_created: usize,

    /// Number of issues that failed to translate.
    pub issues_failed: usize,

    /// Number of wikis migrated.
    pub wikis_migrated: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a repository result.
    pub fn record_result(&mut self, result: &RepositoryResult) {
        match result {
            RepositoryResult::Migrated { report } => {
                self.repositories_migrated += 1;
                self.issues_created += report.issues.created;
                self.issues_failed += report.issues.failed;
                if report.wiki == WikiStatus::Migrated {
                    self.wikis_migrated += 1;
                }
            }
            RepositoryResult::Skipped { .. } => self.repositories_skipped += 1,
            RepositoryResult::Failed { .. } => self.repositories_failed += 1,
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0 || self.issues_failed > 0
    }

    /// Returns true if every processed repository migrated cleanly.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueReport;
    use crate::summary::RepositoryReport;

    #[test]
    fn can_record_results() {
        let mut summary = RunSummary::new();

        summary.record_result(&RepositoryResult::Migrated {
            report: RepositoryReport {
                repository: "demo".to_string(),
                project_url: "https://gitlab.example.com/my-org/demo".to_string(),
                issues: IssueReport {
                    created: 3,
                    failed: 1,
                },
                wiki: WikiStatus::Migrated,
            },
        });
        summary.record_result(&RepositoryResult::Skipped {
            repository: "other".to_string(),
            reason: "did not match repository filter".to_string(),
        });

        assert_eq!(summary.repositories_migrated, 1);
        assert_eq!(summary.repositories_skipped, 1);
        assert_eq!(summary.issues_created, 3);
        assert_eq!(summary.wikis_migrated, 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn failed_repository_counts_as_failure() {
        let mut summary = RunSummary::new();
        summary.record_result(&RepositoryResult::Failed {
            repository: "demo".to_string(),
            error: "git push failed".to_string(),
        });

        assert!(!summary.all_success());
        assert_eq!(summary.repositories_failed, 1);
    }
}
