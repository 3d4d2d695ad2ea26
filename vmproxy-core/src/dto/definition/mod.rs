//! Build definition DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Build definition (pipeline) as returned by
/// `GET {project}/_apis/build/definitions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefinition {
    pub id: i32,
    pub name: String,
    pub project: TeamProjectReference,
    #[serde(default)]
    pub revision: Option<i32>,
}

/// Reference to the team project a definition or build belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    pub id: Uuid,
    pub name: String,
}
