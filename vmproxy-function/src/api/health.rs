//! Health Check API Handler
//!
//! Liveness check for the custom handler process. Makes no outbound calls.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
