//! Build API Handler
//!
//! The function itself: validate → connect → select → submit → respond.
//! The first failure ends the request.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use vmproxy_core::domain::build::{BuildParameters, QueuedBuildResult};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::{build_service, connection_service};

/// Query string of the function trigger
///
/// Keys match case-insensitively (`os`, `OS`, `Os` are the same parameter);
/// values are kept exactly as sent. The first occurrence of a key wins.
#[derive(Debug, Default)]
pub struct QueueBuildQuery {
    pub os: Option<String>,
    pub alias: Option<String>,
}

impl QueueBuildQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = if key.eq_ignore_ascii_case("os") {
                &mut query.os
            } else if key.eq_ignore_ascii_case("alias") {
                &mut query.alias
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// POST /api/VMProxy?os=...&alias=...
/// Queue a build of the pipeline matching `os` on behalf of `alias`
pub async fn queue_build(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<QueuedBuildResult>> {
    tracing::info!("VMProxy HTTP trigger function processed a request");

    // An unparsable query string carries no usable parameters either
    let query = match query {
        Ok(Query(pairs)) => QueueBuildQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection);
            QueueBuildQuery::default()
        }
    };

    let params = BuildParameters::from_query(query.os.as_deref(), query.alias.as_deref())
        .ok_or(ApiError::MissingParameters)?;

    let payload = params.to_json();
    tracing::info!("Build parameters: {}", payload);

    let url = state.config.server_url();
    let session =
        connection_service::establish(state.server.as_ref(), &url, &state.config.token).await?;

    let selection = params.selection();
    let definition_id = state.config.pipelines().resolve(selection);
    tracing::info!(
        "Requested environment '{}' selects the {} pipeline (definition {})",
        params.request_environment,
        selection,
        definition_id
    );

    let result = build_service::submit(
        session.as_ref(),
        &state.config.project,
        definition_id,
        &payload,
    )
    .await?;

    tracing::info!(
        "Build {} queued for {}: {}",
        result.build_number,
        params.request_alias,
        result.uri
    );

    Ok(Json(result))
}
