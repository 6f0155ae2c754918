//! Destination platform client (GitLab).
//!
//! [`GitlabDestination`] speaks the GitLab REST v4 API over reqwest with
//! `PRIVATE-TOKEN` authentication. The [`DestinationHost`] trait is the seam
//! used by the orchestrator; tests substitute an in-memory recording fake.

mod error;
mod types;

pub use error::RemoteApiError;
pub use types::{Group, Project};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// Mutating view of the destination platform.
#[async_trait]
pub trait DestinationHost: Send + Sync {
    /// Lists all groups visible to the configured token.
    async fn list_groups(&self) -> Result<Vec<Group>, RemoteApiError>;

    /// Creates a group with the given name and path.
    async fn create_group(&self, name: &str, path: &str) -> Result<Group, RemoteApiError>;

    /// Creates a project owned by the token's user.
    async fn create_project(&self, name: &str) -> Result<Project, RemoteApiError>;

    /// Creates an issue in a project.
    async fn create_issue(
        &self,
        project_id: u64,
        title: &str,
        description: &str,
    ) -> Result<(), RemoteApiError>;

    /// Moves a project into a group.
    async fn transfer_project(&self, group_id: u64, project_id: u64)
        -> Result<(), RemoteApiError>;
}

/// [`DestinationHost`] implementation backed by the GitLab REST v4 API.
pub struct GitlabDestination {
    client: Client,
    base_url: String,
    token: String,
}

impl GitlabDestination {
    /// Creates a client for the GitLab instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteApiError`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str) -> Result<Self, RemoteApiError> {
        let client = Client::builder()
            .user_agent("github-gitlab-migrate")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{path}", self.base_url)
    }

    /// Sends a request with authentication and maps error statuses.
    async fn request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RemoteApiError> {
        let response = request.header("PRIVATE-TOKEN", &self.token).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(RemoteApiError::AuthenticationFailed);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteApiError::Api { status, body });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteApiError> {
        let response = self.request(self.client.get(self.api_url(path))).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DestinationHost for GitlabDestination {
    async fn list_groups(&self) -> Result<Vec<Group>, RemoteApiError> {
        let mut all_groups = Vec::new();
        let mut page = 1;

        loop {
            let groups: Vec<Group> = self
                .get_json(&format!("/groups?page={page}&per_page=100"))
                .await?;
            if groups.is_empty() {
                break;
            }
            let count = groups.len();
            all_groups.extend(groups);
            if count < 100 {
                break;
            }
            page += 1;
        }

        Ok(all_groups)
    }

    async fn create_group(&self, name: &str, path: &str) -> Result<Group, RemoteApiError> {
        debug!(name, "Creating group");
        let response = self
            .request(
                self.client
                    .post(self.api_url("/groups"))
                    .json(&json!({ "name": name, "path": path })),
            )
            .await?;
        Ok(response.json().await?)
    }

    async fn create_project(&self, name: &str) -> Result<Project, RemoteApiError> {
        debug!(name, "Creating project");
        let response = self
            .request(
                self.client
                    .post(self.api_url("/projects"))
                    .json(&json!({ "name": name })),
            )
            .await?;
        Ok(response.json().await?)
    }

    async fn create_issue(
        &self,
        project_id: u64,
        title: &str,
        description: &str,
    ) -> Result<(), RemoteApiError> {
        self.request(
            self.client
                .post(self.api_url(&format!("/projects/{project_id}/issues")))
                .json(&json!({ "title": title, "description": description })),
        )
        .await?;
        Ok(())
    }

    async fn transfer_project(
        &self,
        group_id: u64,
        project_id: u64,
    ) -> Result<(), RemoteApiError> {
        debug!(group_id, project_id, "Transferring project ownership");
        self.request(
            self.client
                .put(self.api_url(&format!("/projects/{project_id}/transfer")))
                .json(&json!({ "namespace": group_id })),
        )
        .await?;
        Ok(())
    }
}
