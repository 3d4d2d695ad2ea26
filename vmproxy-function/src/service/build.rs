//! Build Service
//!
//! Looks up the selected build definition, queues one build of it and
//! reduces the server's answer to a [`QueuedBuildResult`].

use thiserror::Error;
use url::Url;
use vmproxy_client::{BuildSession, ClientError};
use vmproxy_core::domain::build::QueuedBuildResult;
use vmproxy_core::dto::build::{Build, QueueBuild};

/// Service error type
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("build definition {definition_id} could not be loaded: {source}")]
    DefinitionNotFound {
        definition_id: i32,
        #[source]
        source: ClientError,
    },

    #[error("queueing build definition {definition_id} failed: {source}")]
    QueueFailed {
        definition_id: i32,
        #[source]
        source: ClientError,
    },

    #[error("build definition {definition_id} returned no usable result: {reason}")]
    NoResult { definition_id: i32, reason: String },
}

impl SubmissionError {
    /// Definition the failed submission was for
    pub fn definition_id(&self) -> i32 {
        match self {
            SubmissionError::DefinitionNotFound { definition_id, .. }
            | SubmissionError::QueueFailed { definition_id, .. }
            | SubmissionError::NoResult { definition_id, .. } => *definition_id,
        }
    }
}

/// Queue a new build of `definition_id` in `project`
///
/// `parameters` is forwarded verbatim. Every call queues a new build.
pub async fn submit(
    session: &dyn BuildSession,
    project: &str,
    definition_id: i32,
    parameters: &str,
) -> Result<QueuedBuildResult, SubmissionError> {
    let definition = session
        .get_definition(project, definition_id)
        .await
        .map_err(|source| SubmissionError::DefinitionNotFound {
            definition_id,
            source,
        })?;

    tracing::debug!(
        "Resolved definition {} ({}) in project {}",
        definition.id,
        definition.name,
        definition.project.name
    );

    let build = session
        .queue_build(&QueueBuild::for_definition(&definition, parameters))
        .await
        .map_err(|source| SubmissionError::QueueFailed {
            definition_id,
            source,
        })?;

    tracing::info!(
        "Queued build {} of definition {} (status: {}, queued at: {})",
        build.id,
        definition_id,
        build.status.as_deref().unwrap_or("unknown"),
        build
            .queue_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string())
    );

    queued_result(&build).map_err(|reason| SubmissionError::NoResult {
        definition_id,
        reason,
    })
}

/// Extract the build number and web link from a queued build
fn queued_result(build: &Build) -> Result<QueuedBuildResult, String> {
    let build_number = build
        .build_number
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| format!("build {} has no build number", build.id))?;

    let href = build
        .web_link()
        .ok_or_else(|| format!("build {} has no '{}' link", build.id, Build::WEB_LINK))?;

    Url::parse(href).map_err(|e| format!("invalid '{}' link '{}': {}", Build::WEB_LINK, href, e))?;

    Ok(QueuedBuildResult {
        build_number,
        uri: href.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedServer;

    const PARAMS: &str = r#"{"RequestEnvironment":"Redhat","RequestAlias":"jdoe"}"#;

    #[tokio::test]
    async fn test_submit_queues_one_build() {
        let server = ScriptedServer::new();

        let result = submit(&server.session(), "Infra", 34, PARAMS).await.unwrap();

        assert_eq!(result.build_number, "20240101.1");
        assert_eq!(result.uri, "https://ci.example/build/42");
        server.calls(|calls| {
            assert_eq!(calls.definitions, vec![("Infra".to_string(), 34)]);
            assert_eq!(calls.queued.len(), 1);
            assert_eq!(calls.queued[0].definition.id, 34);
            assert_eq!(calls.queued[0].parameters, PARAMS);
        });
    }

    #[tokio::test]
    async fn test_submit_twice_queues_twice() {
        let server = ScriptedServer::new();
        let session = server.session();

        submit(&session, "Infra", 12, PARAMS).await.unwrap();
        submit(&session, "Infra", 12, PARAMS).await.unwrap();

        server.calls(|calls| assert_eq!(calls.queued.len(), 2));
    }

    #[tokio::test]
    async fn test_unknown_definition_is_not_queued() {
        let server = ScriptedServer::new();

        let err = submit(&server.session(), "Infra", 99, PARAMS)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::DefinitionNotFound { .. }));
        assert_eq!(err.definition_id(), 99);
        server.calls(|calls| assert!(calls.queued.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_web_link() {
        let server = ScriptedServer {
            web_link: None,
            ..ScriptedServer::new()
        };

        let err = submit(&server.session(), "Infra", 34, PARAMS)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::NoResult { .. }));
        assert_eq!(err.definition_id(), 34);
    }

    #[tokio::test]
    async fn test_invalid_web_link() {
        let server = ScriptedServer {
            web_link: Some("not a link".to_string()),
            ..ScriptedServer::new()
        };

        let err = submit(&server.session(), "Infra", 34, PARAMS)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::NoResult { .. }));
    }

    #[tokio::test]
    async fn test_missing_build_number() {
        let server = ScriptedServer {
            build_number: None,
            ..ScriptedServer::new()
        };

        let err = submit(&server.session(), "Infra", 12, PARAMS)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::NoResult { .. }));
        assert_eq!(err.definition_id(), 12);
    }
}
