//! API Module
//!
//! HTTP layer of the custom handler.
//! The Functions host forwards the `VMProxy` trigger to [`FUNCTION_ROUTE`].

pub mod build;
pub mod error;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use vmproxy_client::BuildServer;

use crate::config::Config;

/// Route the Functions host forwards the `VMProxy` HTTP trigger to
pub const FUNCTION_ROUTE: &str = "/api/VMProxy";

/// Shared handler state
///
/// Read-only after startup; every request opens its own session.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub server: Arc<dyn BuildServer>,
}

impl AppState {
    pub fn new(config: Config, server: Arc<dyn BuildServer>) -> Self {
        Self {
            config: Arc::new(config),
            server,
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Function trigger
        .route(FUNCTION_ROUTE, post(build::queue_build))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
