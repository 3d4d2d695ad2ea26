//! Build server capability traits
//!
//! The function only needs three things from the CI server: authenticate,
//! look up a definition, queue a build. These traits expose exactly that,
//! so callers never depend on the HTTP client's object model and tests can
//! substitute a scripted server.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use vmproxy_core::dto::build::{Build, QueueBuild};
use vmproxy_core::dto::definition::BuildDefinition;

use crate::DevOpsClient;
use crate::error::{ClientError, Result};

/// User agent sent with every outbound request
const USER_AGENT: &str = concat!("vmproxy/", env!("CARGO_PKG_VERSION"));

/// Entry point to a build server: turns credentials into a session
#[async_trait]
pub trait BuildServer: Send + Sync {
    /// Establishes an authenticated session
    ///
    /// Makes exactly one attempt. Any failure (network, rejected token,
    /// anonymous identity) is an error; there is no partially authenticated
    /// session.
    ///
    /// # Arguments
    /// * `url` - Organization or collection URL
    /// * `token` - Personal access token
    async fn authenticate(&self, url: &str, token: &str) -> Result<Box<dyn BuildSession>>;
}

/// Authenticated handle to a build server
///
/// Scoped to a single request; dropped when the request completes.
#[async_trait]
pub trait BuildSession: Send + Sync {
    /// URL the session is connected to
    fn url(&self) -> &str;

    /// Fetches a build definition by ID within a project
    async fn get_definition(&self, project: &str, definition_id: i32) -> Result<BuildDefinition>;

    /// Queues one build; calling twice queues two builds
    async fn queue_build(&self, build: &QueueBuild) -> Result<Build>;
}

/// [`BuildServer`] backed by the Azure DevOps REST API
///
/// Each session gets its own HTTP client, so nothing is pooled or shared
/// between requests.
#[derive(Debug, Clone, Default)]
pub struct HttpBuildServer {}

impl HttpBuildServer {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl BuildServer for HttpBuildServer {
    async fn authenticate(&self, url: &str, token: &str) -> Result<Box<dyn BuildSession>> {
        if token.is_empty() {
            return Err(ClientError::InvalidRequest(
                "access token cannot be empty".to_string(),
            ));
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let client = DevOpsClient::with_client(url, token, http);

        debug!("Requesting connection data from {}", client.base_url());

        let data = client.connection_data().await.map_err(|e| match e {
            e @ ClientError::AuthenticationFailed(_) => e,
            e if e.is_unauthorized() => ClientError::AuthenticationFailed(e.to_string()),
            // A non-JSON answer is a sign-in page, not connection data
            ClientError::ParseError(msg) => ClientError::AuthenticationFailed(msg),
            other => other,
        })?;

        if !data.has_authenticated() {
            return Err(ClientError::AuthenticationFailed(
                "server did not resolve the token to an identity".to_string(),
            ));
        }

        if let Some(user) = &data.authenticated_user {
            info!(
                "Authenticated to {} as {}",
                client.base_url(),
                user.provider_display_name.as_deref().unwrap_or("<unnamed>")
            );
        }

        Ok(Box::new(client))
    }
}

#[async_trait]
impl BuildSession for DevOpsClient {
    fn url(&self) -> &str {
        self.base_url()
    }

    async fn get_definition(&self, project: &str, definition_id: i32) -> Result<BuildDefinition> {
        DevOpsClient::get_definition(self, project, definition_id).await
    }

    async fn queue_build(&self, build: &QueueBuild) -> Result<Build> {
        let project = build.project.id.to_string();
        DevOpsClient::queue_build(self, &project, build).await
    }
}
