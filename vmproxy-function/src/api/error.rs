//! API Error Handling
//!
//! Every failure the function reports is a 400 with a plain-text message.
//! The underlying cause is logged here and kept out of the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::build_service::SubmissionError;
use crate::service::connection_service::ConnectionError;

/// Message returned when `os` or `alias` is missing
pub const MISSING_PARAMETERS: &str = "Please pass required parameters on the query string";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter is missing or empty
    MissingParameters,
    /// No authenticated session could be established
    ConnectionFailed { url: String },
    /// The build could not be queued
    SubmissionFailed { definition_id: i32 },
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::MissingParameters => MISSING_PARAMETERS.to_string(),
            ApiError::ConnectionFailed { url } => format!(
                "Connection to '{}' failed. Please verify the access token and try again",
                url
            ),
            ApiError::SubmissionFailed { definition_id } => format!(
                "The kickoff of build definition {} is not successful",
                definition_id
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.message()).into_response()
    }
}

impl From<ConnectionError> for ApiError {
    fn from(err: ConnectionError) -> Self {
        tracing::warn!("{}", err);
        ApiError::ConnectionFailed {
            url: err.url().to_string(),
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        tracing::error!("{}", err);
        ApiError::SubmissionFailed {
            definition_id: err.definition_id(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_message_names_url() {
        let err = ApiError::ConnectionFailed {
            url: "https://dev.azure.com/acme".to_string(),
        };
        assert!(err.message().contains("'https://dev.azure.com/acme'"));
    }

    #[test]
    fn test_submission_message_names_definition() {
        let err = ApiError::SubmissionFailed { definition_id: 34 };
        assert_eq!(
            err.message(),
            "The kickoff of build definition 34 is not successful"
        );
    }

    #[test]
    fn test_errors_are_bad_requests() {
        let response = ApiError::MissingParameters.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
