#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod destination;
pub mod git;
pub mod issues;
pub mod runner;
pub mod source;
pub mod summary;
pub mod transfer;
pub mod wiki;
pub mod workspace;

pub use config::{ConfigError, MigrationConfig};
pub use destination::{DestinationHost, GitlabDestination, Group, Project, RemoteApiError};
pub use git::{GitCli, GitError, Vcs};
pub use issues::{flatten_issue_body, translate_issues, IssueReport};
pub use runner::{MigrateError, Runner, RunnerError};
pub use source::{
    GithubSource, SourceComment, SourceError, SourceHost, SourceIssue, SourceRepository,
};
pub use summary::{RepositoryReport, RepositoryResult, RunSummary};
pub use transfer::{
    authenticated_clone_url, create_project, ensure_group, push_repository, sanitize_project_name,
    sync_local_clone, transfer_ownership,
};
pub use wiki::{
    transfer_wiki, wiki_clone_url, HttpWikiProvisioner, WikiError, WikiProvisioner, WikiStatus,
};
pub use workspace::Workspace;
