//! Build DTOs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dto::definition::{BuildDefinition, TeamProjectReference};

/// Request body for `POST {project}/_apis/build/builds`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueBuild {
    pub definition: DefinitionReference,
    pub project: TeamProjectReference,
    /// JSON object string, passed to the server as-is
    pub parameters: String,
}

impl QueueBuild {
    /// Queues a run of `definition` in the definition's own project
    pub fn for_definition(definition: &BuildDefinition, parameters: impl Into<String>) -> Self {
        Self {
            definition: DefinitionReference { id: definition.id },
            project: definition.project.clone(),
            parameters: parameters.into(),
        }
    }
}

/// Reference to a build definition by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionReference {
    pub id: i32,
}

/// Build returned by the server after queueing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: i32,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub queue_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "_links", default)]
    pub links: ReferenceLinks,
}

impl Build {
    /// Name of the link pointing at the build's web page
    pub const WEB_LINK: &'static str = "web";

    pub fn web_link(&self) -> Option<&str> {
        self.links.href(Self::WEB_LINK)
    }
}

/// Named links attached to a REST resource (`_links`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceLinks(pub HashMap<String, ReferenceLink>);

impl ReferenceLinks {
    pub fn href(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|link| link.href.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub href: String,
}
