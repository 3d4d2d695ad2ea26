//! Build domain types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::pipeline::PipelineSelection;

/// Parameters forwarded to the queued build
///
/// Field order is fixed so the serialized payload is deterministic:
/// `RequestEnvironment` first, then `RequestAlias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParameters {
    #[serde(rename = "RequestEnvironment")]
    pub request_environment: String,
    #[serde(rename = "RequestAlias")]
    pub request_alias: String,
}

impl BuildParameters {
    pub fn new(request_environment: impl Into<String>, request_alias: impl Into<String>) -> Self {
        Self {
            request_environment: request_environment.into(),
            request_alias: request_alias.into(),
        }
    }

    /// Builds the parameter set from raw query values
    ///
    /// Returns `None` unless both values are present and non-empty.
    pub fn from_query(os: Option<&str>, alias: Option<&str>) -> Option<Self> {
        match (os, alias) {
            (Some(os), Some(alias)) if !os.is_empty() && !alias.is_empty() => {
                Some(Self::new(os, alias))
            }
            _ => None,
        }
    }

    /// The pipeline this request should run on
    pub fn selection(&self) -> PipelineSelection {
        PipelineSelection::for_environment(&self.request_environment)
    }

    /// Serializes the parameters to the JSON object string the build expects
    pub fn to_json(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BuildParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Result of a successfully queued build
///
/// Serialized as `{"BuildNumber": ..., "Uri": ...}` in the function response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedBuildResult {
    /// Build number assigned by the server
    #[serde(rename = "BuildNumber")]
    pub build_number: String,
    /// Web link to the queued build
    #[serde(rename = "Uri")]
    pub uri: String,
}
