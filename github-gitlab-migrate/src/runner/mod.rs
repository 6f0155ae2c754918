//! Orchestrates a full migration run.
//!
//! The runner lists the source space's repositories and migrates them one at
//! a time, strictly sequentially. Each repository runs inside its own
//! result-capturing boundary: a failure is recorded in the summary and the
//! loop continues with the next repository.

mod error;

pub use error::{MigrateError, RunnerError};

use crate::config::MigrationConfig;
use crate::destination::{DestinationHost, GitlabDestination, Group};
use crate::git::{GitCli, Vcs};
use crate::issues::{self, IssueReport};
use crate::source::{GithubSource, SourceHost, SourceRepository};
use crate::summary::{RepositoryReport, RepositoryResult, RunSummary};
use crate::transfer;
use crate::wiki::{self, HttpWikiProvisioner, WikiProvisioner, WikiStatus};
use crate::workspace::Workspace;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Orchestrates the migration of a source space into a destination group.
pub struct Runner {
    config: MigrationConfig,
    source: Arc<dyn SourceHost>,
    destination: Arc<dyn DestinationHost>,
    git: Arc<dyn Vcs>,
    provisioner: Arc<dyn WikiProvisioner>,
}

impl Runner {
    /// Builds a runner with real platform clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] when validation fails or a client cannot be
    /// constructed. No network activity happens here.
    pub fn new(config: MigrationConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let source = GithubSource::new(&config)?;
        let destination = GitlabDestination::new(config.gitlab_api(), config.gitlab_token())?;
        let provisioner = HttpWikiProvisioner::new(
            config.gitlab_token(),
            config.wiki_host().map(str::to_string),
        )?;
        Ok(Self::from_parts(
            config,
            Arc::new(source),
            Arc::new(destination),
            Arc::new(GitCli),
            Arc::new(provisioner),
        ))
    }

    fn from_parts(
        config: MigrationConfig,
        source: Arc<dyn SourceHost>,
        destination: Arc<dyn DestinationHost>,
        git: Arc<dyn Vcs>,
        provisioner: Arc<dyn WikiProvisioner>,
    ) -> Self {
        Self {
            config,
            source,
            destination,
            git,
            provisioner,
        }
    }

    /// Executes the full migration run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] when the workspace cannot be allocated or the
    /// source repository listing fails. Per-repository failures do not
    /// surface here; they are recorded in the returned summary.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();
        let workspace = Workspace::new()?;

        info!(space = %self.config.space(), "Listing source repositories");
        let repositories = self.source.list_repositories(self.config.space()).await?;

        if repositories.is_empty() {
            warn!("No repositories found");
            return Ok(summary);
        }

        info!(count = repositories.len(), "Found repositories");
        summary.repositories_discovered = repositories.len();

        let mut group_cache: Option<Group> = None;
        for repository in &repositories {
            if let Some(filter) = self.config.repo_filter() {
                if repository.name != filter {
                    info!(repo = %repository.name, "Skipping repository");
                    summary.record_result(&RepositoryResult::Skipped {
                        repository: repository.name.clone(),
                        reason: "did not match repository filter".to_string(),
                    });
                    continue;
                }
            }

            info!(repo = %repository.name, "Importing repository");
            let result = match self
                .migrate_repository(repository, &workspace, &mut group_cache)
                .await
            {
                Ok(report) => {
                    info!(repo = %repository.name, "Repository migrated");
                    RepositoryResult::Migrated { report }
                }
                Err(e) => {
                    error!(repo = %repository.name, error = %e, "Repository migration failed");
                    RepositoryResult::Failed {
                        repository: repository.name.clone(),
                        error: e.to_string(),
                    }
                }
            };
            summary.record_result(&result);
        }

        Ok(summary)
    }

    /// Migrates one repository start to finish.
    async fn migrate_repository(
        &self,
        repository: &SourceRepository,
        workspace: &Workspace,
        group_cache: &mut Option<Group>,
    ) -> Result<RepositoryReport, MigrateError> {
        let span = info_span!("migrate_repository", repo = %repository.full_name);

        async {
            let local =
                transfer::sync_local_clone(self.git.as_ref(), &self.config, repository, workspace)
                    .await?;
            let group =
                transfer::ensure_group(self.destination.as_ref(), self.config.space(), group_cache)
                    .await?;
            let project = transfer::create_project(self.destination.as_ref(), &repository.name)
                .await?;
            transfer::push_repository(self.git.as_ref(), &local, &project).await?;

            let issues = if repository.has_issues {
                issues::translate_issues(
                    self.source.as_ref(),
                    self.destination.as_ref(),
                    repository,
                    &project,
                )
                .await?
            } else {
                IssueReport::default()
            };

            let wiki = if repository.has_wiki {
                wiki::transfer_wiki(
                    self.git.as_ref(),
                    self.provisioner.as_ref(),
                    &self.config,
                    repository,
                    &project,
                    workspace,
                )
                .await
            } else {
                WikiStatus::Absent
            };

            transfer::transfer_ownership(self.destination.as_ref(), &group, &project).await?;

            Ok(RepositoryReport {
                repository: repository.name.clone(),
                project_url: project.web_url.clone(),
                issues,
                wiki,
            })
        }
        .instrument(span)
        .await
    }
}
