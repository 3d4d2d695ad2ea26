//! Pipeline domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two preconfigured build pipelines
///
/// Exactly `"Redhat"` selects [`PipelineSelection::Redhat`]. Every other
/// environment name, recognized or not, falls back to Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineSelection {
    Windows,
    Redhat,
}

impl PipelineSelection {
    /// Environment name that selects the Redhat pipeline
    pub const REDHAT: &'static str = "Redhat";

    pub fn for_environment(environment: &str) -> Self {
        if environment == Self::REDHAT {
            PipelineSelection::Redhat
        } else {
            PipelineSelection::Windows
        }
    }
}

impl fmt::Display for PipelineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineSelection::Windows => f.write_str("Windows"),
            PipelineSelection::Redhat => f.write_str("Redhat"),
        }
    }
}

/// Build definition ids configured for each pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineIds {
    pub windows: i32,
    pub redhat: i32,
}

impl PipelineIds {
    pub fn new(windows: i32, redhat: i32) -> Self {
        Self { windows, redhat }
    }

    /// Returns the definition id for the selected pipeline
    pub fn resolve(&self, selection: PipelineSelection) -> i32 {
        match selection {
            PipelineSelection::Windows => self.windows,
            PipelineSelection::Redhat => self.redhat,
        }
    }
}
