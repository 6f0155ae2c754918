//! Source platform client (GitHub).
//!
//! [`GithubSource`] wraps an authenticated octocrab client behind the
//! [`SourceHost`] trait so the orchestrator never talks to the API directly.
//! Listings are read-only; the source platform is never mutated.

mod error;
mod repository;

pub use error::SourceError;
pub use repository::{SourceComment, SourceIssue, SourceRepository};

use crate::config::MigrationConfig;
use async_trait::async_trait;
use octocrab::models;
use octocrab::params;
use octocrab::Octocrab;
use tracing::debug;

/// Read-only view of the source platform.
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// Lists all repositories in a space (user or organization).
    async fn list_repositories(&self, space: &str)
        -> Result<Vec<SourceRepository>, SourceError>;

    /// Lists all open issues of a repository, excluding pull requests.
    async fn list_issues(&self, full_name: &str) -> Result<Vec<SourceIssue>, SourceError>;

    /// Lists the comment thread of an issue in original order.
    async fn list_issue_comments(
        &self,
        full_name: &str,
        number: u64,
    ) -> Result<Vec<SourceComment>, SourceError>;
}

/// [`SourceHost`] implementation backed by the GitHub REST API.
pub struct GithubSource {
    octocrab: Octocrab,
}

impl GithubSource {
    /// Builds an authenticated client from the run configuration.
    ///
    /// In enterprise mode the configured API endpoint replaces the default
    /// github.com base URI.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the client cannot be constructed.
    pub fn new(config: &MigrationConfig) -> Result<Self, SourceError> {
        let mut builder = Octocrab::builder().basic_auth(
            config.github_user().to_string(),
            config.github_password().to_string(),
        );
        if config.enterprise() {
            builder = builder.base_uri(config.github_api())?;
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl SourceHost for GithubSource {
    async fn list_repositories(
        &self,
        space: &str,
    ) -> Result<Vec<SourceRepository>, SourceError> {
        // A space can be an organization or a plain user; the listing
        // endpoints differ, so fall back to the user listing on failure.
        let page = match self.octocrab.orgs(space).list_repos().per_page(100).send().await {
            Ok(page) => page,
            Err(org_error) => {
                debug!(space, error = %org_error, "Organization listing failed, trying user listing");
                self.octocrab.users(space).repos().per_page(100).send().await?
            }
        };

        let repositories = self.octocrab.all_pages(page).await?;
        repositories.into_iter().map(to_descriptor).collect()
    }

    async fn list_issues(&self, full_name: &str) -> Result<Vec<SourceIssue>, SourceError> {
        let (owner, name) = split_full_name(full_name)?;
        let page = self
            .octocrab
            .issues(owner, name)
            .list()
            .state(params::State::Open)
            .per_page(100)
            .send()
            .await?;
        let issues = self.octocrab.all_pages(page).await?;

        // The GitHub issues listing also returns pull requests; those have no
        // counterpart on the destination and are dropped here.
        Ok(issues
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(|issue| SourceIssue {
                number: issue.number,
                title: issue.title,
                body: issue.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn list_issue_comments(
        &self,
        full_name: &str,
        number: u64,
    ) -> Result<Vec<SourceComment>, SourceError> {
        let (owner, name) = split_full_name(full_name)?;
        let page = self
            .octocrab
            .issues(owner, name)
            .list_comments(number)
            .per_page(100)
            .send()
            .await?;
        let comments = self.octocrab.all_pages(page).await?;

        Ok(comments
            .into_iter()
            .map(|comment| SourceComment {
                body: comment.body.unwrap_or_default(),
                author: comment.user.login,
                created_at: comment.created_at,
            })
            .collect())
    }
}

/// Maps an API repository onto the migration descriptor.
fn to_descriptor(repository: models::Repository) -> Result<SourceRepository, SourceError> {
    let full_name = repository
        .full_name
        .clone()
        .ok_or_else(|| SourceError::MissingField {
            repo: repository.name.clone(),
            field: "full_name",
        })?;
    let clone_url = repository
        .clone_url
        .clone()
        .ok_or_else(|| SourceError::MissingField {
            repo: repository.name.clone(),
            field: "clone_url",
        })?;

    Ok(SourceRepository {
        name: repository.name,
        full_name,
        clone_url: clone_url.to_string(),
        has_issues: repository.has_issues.unwrap_or(false),
        has_wiki: repository.has_wiki.unwrap_or(false),
    })
}

/// Splits an `owner/name` qualified name into its parts.
fn split_full_name(full_name: &str) -> Result<(&str, &str), SourceError> {
    full_name
        .split_once('/')
        .ok_or_else(|| SourceError::InvalidFullName {
            full_name: full_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_qualified_names() {
        assert_eq!(split_full_name("org/repo").unwrap(), ("org", "repo"));
        assert!(split_full_name("no-slash").is_err());
    }
}
