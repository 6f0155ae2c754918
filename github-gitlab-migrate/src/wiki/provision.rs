//! Destination wiki provisioning.
//!
//! The destination exposes no API call that creates the wiki backing
//! repository; it is created lazily when the wiki home page is first
//! visited. This side effect sits behind a narrow trait so the workaround
//! can be swapped per destination version without touching orchestration.

use super::WikiError;
use crate::destination::Project;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Provisioning side effect that makes a project's wiki pushable.
#[async_trait]
pub trait WikiProvisioner: Send + Sync {
    /// Forces the destination to create the wiki backing repository.
    async fn provision(&self, project: &Project) -> Result<(), WikiError>;
}

/// Provisions by one authenticated GET of the project's wiki home page.
///
/// The page URL is derived from the project's web URL. Installations where
/// the user-facing surface lives on a different host than the API can set a
/// host override.
pub struct HttpWikiProvisioner {
    client: Client,
    token: String,
    host_override: Option<String>,
}

impl HttpWikiProvisioner {
    /// Creates a provisioner authenticating with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError`] when the HTTP client cannot be built.
    pub fn new(token: &str, host_override: Option<String>) -> Result<Self, WikiError> {
        let client = Client::builder()
            .user_agent("github-gitlab-migrate")
            .build()?;
        Ok(Self {
            client,
            token: token.to_string(),
            host_override,
        })
    }
}

#[async_trait]
impl WikiProvisioner for HttpWikiProvisioner {
    async fn provision(&self, project: &Project) -> Result<(), WikiError> {
        let wiki_home = wiki_home_url(&project.web_url, self.host_override.as_deref());
        debug!(url = %wiki_home, "Visiting wiki home page to provision backing repository");

        let response = self
            .client
            .get(&wiki_home)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WikiError::Provision {
                status: response.status(),
            });
        }

        Ok(())
    }
}

/// Builds the wiki home page URL, applying the host override when set.
fn wiki_home_url(web_url: &str, host_override: Option<&str>) -> String {
    let home = format!("{}/wikis/home", web_url.trim_end_matches('/'));
    let Some(host) = host_override else {
        return home;
    };

    match (Url::parse(&home), Url::parse(host)) {
        (Ok(mut url), Ok(base)) => {
            let _ = url.set_scheme(base.scheme());
            let _ = url.set_host(base.host_str());
            let _ = url.set_port(base.port());
            url.into()
        }
        _ => home,
    }
}
