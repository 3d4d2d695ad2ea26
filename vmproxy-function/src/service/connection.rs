//! Connection Service
//!
//! Establishes the authenticated session a request runs under.

use thiserror::Error;
use vmproxy_client::{BuildServer, BuildSession, ClientError};

/// Service error type
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("authentication to '{url}' failed: {source}")]
    AuthenticationFailure {
        url: String,
        #[source]
        source: ClientError,
    },
}

impl ConnectionError {
    /// URL the failed connection was aimed at
    pub fn url(&self) -> &str {
        match self {
            ConnectionError::AuthenticationFailure { url, .. } => url,
        }
    }
}

/// Establish a session with the build server
///
/// Exactly one attempt; the session is owned by the caller and dropped with
/// the request.
pub async fn establish(
    server: &dyn BuildServer,
    url: &str,
    token: &str,
) -> Result<Box<dyn BuildSession>, ConnectionError> {
    let session = server
        .authenticate(url, token)
        .await
        .map_err(|source| ConnectionError::AuthenticationFailure {
            url: url.to_string(),
            source,
        })?;

    tracing::info!("Connection to {} established", session.url());

    Ok(session)
}
