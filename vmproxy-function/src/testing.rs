//! Scripted build server for tests
//!
//! Records every call so tests can assert which outbound requests a
//! function invocation would have made.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vmproxy_client::{BuildServer, BuildSession, ClientError, Result};
use vmproxy_core::dto::build::{Build, QueueBuild, ReferenceLink, ReferenceLinks};
use vmproxy_core::dto::definition::{BuildDefinition, TeamProjectReference};

use crate::config::Config;

pub const WINDOWS_ID: i32 = 12;
pub const REDHAT_ID: i32 = 34;

/// Configuration pointing at the hosted `acme` organization
pub fn test_config() -> Config {
    Config {
        account: "acme".to_string(),
        project_collection: "DefaultCollection".to_string(),
        project: "Infra".to_string(),
        token: "pat".to_string(),
        windows_build_def_id: WINDOWS_ID,
        redhat_build_def_id: REDHAT_ID,
        on_premises_url: None,
        port: 8080,
    }
}

/// Calls observed by a [`ScriptedServer`]
#[derive(Debug, Default)]
pub struct Calls {
    pub authenticated: Vec<(String, String)>,
    pub definitions: Vec<(String, i32)>,
    pub queued: Vec<QueueBuild>,
}

/// In-memory [`BuildServer`] with scripted outcomes
#[derive(Clone)]
pub struct ScriptedServer {
    pub calls_log: Arc<Mutex<Calls>>,
    pub accept_token: bool,
    pub known_definitions: Vec<i32>,
    pub build_number: Option<String>,
    pub web_link: Option<String>,
}

impl ScriptedServer {
    /// A server that accepts the token, knows both definitions and returns
    /// `20240101.1` / `https://ci.example/build/42`
    pub fn new() -> Self {
        Self {
            calls_log: Arc::new(Mutex::new(Calls::default())),
            accept_token: true,
            known_definitions: vec![WINDOWS_ID, REDHAT_ID],
            build_number: Some("20240101.1".to_string()),
            web_link: Some("https://ci.example/build/42".to_string()),
        }
    }

    pub fn rejecting_token() -> Self {
        Self {
            accept_token: false,
            ..Self::new()
        }
    }

    /// Runs `f` against the recorded calls
    pub fn calls<R>(&self, f: impl FnOnce(&Calls) -> R) -> R {
        f(&self.calls_log.lock().unwrap())
    }

    /// A session on this server, skipping authentication
    pub fn session(&self) -> ScriptedSession {
        ScriptedSession {
            server: self.clone(),
            url: "https://dev.azure.com/acme".to_string(),
        }
    }
}

#[async_trait]
impl BuildServer for ScriptedServer {
    async fn authenticate(&self, url: &str, token: &str) -> Result<Box<dyn BuildSession>> {
        self.calls_log
            .lock()
            .unwrap()
            .authenticated
            .push((url.to_string(), token.to_string()));

        if !self.accept_token {
            return Err(ClientError::AuthenticationFailed(
                "TF400813: the user is not authorized".to_string(),
            ));
        }

        Ok(Box::new(ScriptedSession {
            server: self.clone(),
            url: url.to_string(),
        }))
    }
}

pub struct ScriptedSession {
    server: ScriptedServer,
    url: String,
}

#[async_trait]
impl BuildSession for ScriptedSession {
    fn url(&self) -> &str {
        &self.url
    }

    async fn get_definition(&self, project: &str, definition_id: i32) -> Result<BuildDefinition> {
        self.server
            .calls_log
            .lock()
            .unwrap()
            .definitions
            .push((project.to_string(), definition_id));

        if !self.server.known_definitions.contains(&definition_id) {
            return Err(ClientError::NotFound(format!(
                "Build definition {}",
                definition_id
            )));
        }

        Ok(BuildDefinition {
            id: definition_id,
            name: format!("vm-{}", definition_id),
            project: TeamProjectReference {
                id: Uuid::new_v4(),
                name: project.to_string(),
            },
            revision: Some(1),
        })
    }

    async fn queue_build(&self, build: &QueueBuild) -> Result<Build> {
        self.server.calls_log.lock().unwrap().queued.push(build.clone());

        let mut links = HashMap::new();
        if let Some(href) = &self.server.web_link {
            links.insert(
                Build::WEB_LINK.to_string(),
                ReferenceLink { href: href.clone() },
            );
        }

        Ok(Build {
            id: 1,
            build_number: self.server.build_number.clone(),
            status: Some("notStarted".to_string()),
            queue_time: None,
            links: ReferenceLinks(links),
        })
    }
}
