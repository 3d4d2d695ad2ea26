//! Error types for the DevOps client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the Build REST API
///
/// Authentication problems surface as [`ClientError::AuthenticationFailed`]
/// once the session layer has classified them; the raw HTTP and JSON
/// failures keep their own variants.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got an answer (DNS, refused connection, TLS)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, usually a `TFxxxxxx` error message
        message: String,
    },

    /// The body was not the JSON resource that was asked for
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Definition or project does not exist, or the token cannot see it
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server did not accept the credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The request could not be built (bad base URL, empty token)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::ApiError {
            status,
            message: if message.trim().is_empty() {
                "no response body".to_string()
            } else {
                message
            },
        }
    }

    /// Whether the definition or project lookup came back empty
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::ApiError { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Check if the server refused the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
            || matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}
