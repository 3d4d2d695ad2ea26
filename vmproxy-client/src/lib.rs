//! VMProxy DevOps Client
//!
//! A small, type-safe HTTP client for the Azure DevOps / TFS Build REST API.
//!
//! Only the three calls the build-queue function needs are covered:
//! - Connection data (confirms the access token was accepted)
//! - Build definition lookup
//! - Build queueing
//!
//! Callers normally go through the [`BuildServer`] and [`BuildSession`]
//! traits so the HTTP implementation can be swapped out in tests.
//!
//! # Example
//!
//! ```no_run
//! use vmproxy_client::{BuildServer, BuildSession, HttpBuildServer};
//! use vmproxy_core::dto::build::QueueBuild;
//!
//! # async fn example() -> vmproxy_client::Result<()> {
//! let server = HttpBuildServer::new();
//! let session = server
//!     .authenticate("https://dev.azure.com/acme", "personal-access-token")
//!     .await?;
//!
//! let definition = session.get_definition("Infra", 42).await?;
//! let build = session
//!     .queue_build(&QueueBuild::for_definition(&definition, "{}"))
//!     .await?;
//!
//! println!("Queued build {:?}", build.build_number);
//! # Ok(())
//! # }
//! ```

mod builds;
mod connection;
pub mod error;
mod session;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use session::{BuildServer, BuildSession, HttpBuildServer};

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;

/// REST API version sent with every request
pub const API_VERSION: &str = "7.1";

/// HTTP client for one Azure DevOps organization or TFS project collection
///
/// Every request carries the access token as HTTP Basic credentials with an
/// empty user name.
#[derive(Clone)]
pub struct DevOpsClient {
    /// Base URL of the organization or collection (e.g., "https://dev.azure.com/acme")
    base_url: String,
    /// Personal access token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl DevOpsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The organization or collection URL
    /// * `token` - Personal access token
    ///
    /// # Example
    /// ```
    /// use vmproxy_client::DevOpsClient;
    ///
    /// let client = DevOpsClient::new("https://dev.azure.com/acme", "token");
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the organization or collection
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Construction
    // =============================================================================

    /// Build an endpoint URL by appending path segments to the base URL
    ///
    /// Segments are percent-encoded, so project names with spaces are safe.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Start an authenticated request against `url`
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth("", Some(&self.token))
            .query(&[("api-version", API_VERSION)])
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        // Azure DevOps answers a rejected token with a sign-in page and 203.
        if status == StatusCode::NON_AUTHORITATIVE_INFORMATION {
            return Err(ClientError::AuthenticationFailed(
                "server redirected to an interactive sign-in page".to_string(),
            ));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl fmt::Debug for DevOpsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevOpsClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
