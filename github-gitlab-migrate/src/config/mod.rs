//! Migration run configuration.
//!
//! A [`MigrationConfig`] carries the credentials and endpoints for both
//! platforms plus the optional single-repository filter. It is built once by
//! the CLI and stays immutable for the duration of the run.

mod error;

pub use error::ConfigError;

use url::Url;

/// Default GitHub API endpoint, used unless enterprise mode is enabled.
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Default GitHub web endpoint, used unless enterprise mode is enabled.
pub const DEFAULT_GITHUB_WEB: &str = "https://github.com/";

/// Configuration for a migration run.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// GitHub user to authenticate as.
    github_user: String,
    /// Password or personal access token for the GitHub user.
    github_password: String,
    /// GitHub API endpoint.
    github_api: String,
    /// GitHub web endpoint.
    github_web: String,
    /// Whether the configured enterprise endpoints are in effect.
    enterprise: bool,
    /// Source namespace (user or organization) whose repositories migrate.
    space: String,
    /// GitLab instance URL.
    gitlab_api: String,
    /// GitLab private access token.
    gitlab_token: String,
    /// Migrate only the repository with this name, when set.
    repo_filter: Option<String>,
    /// Host override for the wiki provisioning page visit.
    wiki_host: Option<String>,
}

impl MigrationConfig {
    /// Creates a configuration with the public github.com endpoints.
    pub fn new(
        github_user: String,
        github_password: String,
        space: String,
        gitlab_api: String,
        gitlab_token: String,
    ) -> Self {
        Self {
            github_user,
            github_password,
            github_api: DEFAULT_GITHUB_API.to_string(),
            github_web: DEFAULT_GITHUB_WEB.to_string(),
            enterprise: false,
            space,
            gitlab_api,
            gitlab_token,
            repo_filter: None,
            wiki_host: None,
        }
    }

    /// Switches to GitHub Enterprise mode with custom API and web endpoints.
    pub fn with_enterprise_endpoints(mut self, api: String, web: String) -> Self {
        self.github_api = api;
        self.github_web = web;
        self.enterprise = true;
        self
    }

    /// Restricts the run to a single repository name.
    pub fn with_repo_filter(mut self, repo: String) -> Self {
        self.repo_filter = Some(repo);
        self
    }

    /// Overrides the host used for the wiki provisioning page visit.
    pub fn with_wiki_host(mut self, host: String) -> Self {
        self.wiki_host = Some(host);
        self
    }

    /// Validates the configuration before any network activity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required credential or the space is
    /// missing, or when a configured endpoint is not a valid URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_user.is_empty() {
            return Err(ConfigError::MissingCredential { name: "user" });
        }
        if self.github_password.is_empty() {
            return Err(ConfigError::MissingCredential { name: "password" });
        }
        if self.gitlab_token.is_empty() {
            return Err(ConfigError::MissingCredential { name: "gitlab-token" });
        }
        if self.space.is_empty() {
            return Err(ConfigError::MissingSpace);
        }
        for endpoint in [&self.github_api, &self.github_web, &self.gitlab_api] {
            Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
                url: endpoint.clone(),
                message: e.to_string(),
            })?;
        }
        if let Some(host) = &self.wiki_host {
            Url::parse(host).map_err(|e| ConfigError::InvalidEndpoint {
                url: host.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Returns the GitHub user name.
    pub fn github_user(&self) -> &str {
        &self.github_user
    }

    /// Returns the GitHub password or token.
    pub fn github_password(&self) -> &str {
        &self.github_password
    }

    /// Returns the GitHub API endpoint.
    pub fn github_api(&self) -> &str {
        &self.github_api
    }

    /// Returns the GitHub web endpoint.
    pub fn github_web(&self) -> &str {
        &self.github_web
    }

    /// Returns whether enterprise mode is enabled.
    pub fn enterprise(&self) -> bool {
        self.enterprise
    }

    /// Returns the source namespace.
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Returns the GitLab instance URL.
    pub fn gitlab_api(&self) -> &str {
        &self.gitlab_api
    }

    /// Returns the GitLab private access token.
    pub fn gitlab_token(&self) -> &str {
        &self.gitlab_token
    }

    /// Returns the single-repository filter, if set.
    pub fn repo_filter(&self) -> Option<&str> {
        self.repo_filter.as_deref()
    }

    /// Returns the wiki provisioning host override, if set.
    pub fn wiki_host(&self) -> Option<&str> {
        self.wiki_host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MigrationConfig {
        MigrationConfig::new(
            "alice".to_string(),
            "hunter2".to_string(),
            "my-org".to_string(),
            "https://gitlab.example.com".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn accepts_complete_configuration() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_missing_credentials() {
        let mut bad = config();
        bad.github_password = String::new();
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::MissingCredential { name: "password" })
        ));
    }

    #[test]
    fn rejects_missing_space() {
        let mut bad = config();
        bad.space = String::new();
        assert!(matches!(bad.validate(), Err(ConfigError::MissingSpace)));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let bad = config().with_enterprise_endpoints(
            "not a url".to_string(),
            DEFAULT_GITHUB_WEB.to_string(),
        );
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn enterprise_endpoints_replace_defaults() {
        let config = config().with_enterprise_endpoints(
            "https://github.corp.example.com/api/v3".to_string(),
            "https://github.corp.example.com/".to_string(),
        );
        assert!(config.enterprise());
        assert_eq!(config.github_api(), "https://github.corp.example.com/api/v3");
    }
}
