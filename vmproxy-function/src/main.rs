//! VMProxy Function
//!
//! Azure Functions custom handler that queues a VM build on Azure DevOps.
//!
//! The Functions host forwards each `VMProxy` HTTP trigger to this server.
//! A request is validated, authenticated against the DevOps organization,
//! routed to the Windows or Redhat build definition and queued; the caller
//! gets back the build number and a link to the build.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vmproxy_client::HttpBuildServer;

use crate::api::AppState;
use crate::config::Config;

pub mod api;
pub mod config;
pub mod service;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vmproxy_function=info,vmproxy_client=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VMProxy function...");

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Loaded configuration: server_url={}, project={}, windows_definition={}, redhat_definition={}",
        config.server_url(),
        config.project,
        config.windows_build_def_id,
        config.redhat_build_def_id
    );

    let addr = format!("0.0.0.0:{}", config.port);

    // Build router with all API endpoints
    let state = AppState::new(config, Arc::new(HttpBuildServer::new()));
    let app = api::create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
