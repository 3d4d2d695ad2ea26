//! Build-related API endpoints

use crate::DevOpsClient;
use crate::error::{ClientError, Result};
use reqwest::Method;
use vmproxy_core::dto::build::{Build, QueueBuild};
use vmproxy_core::dto::definition::BuildDefinition;

impl DevOpsClient {
    // =============================================================================
    // Build Definitions
    // =============================================================================

    /// Get a build definition by ID
    ///
    /// # Arguments
    /// * `project` - Project name or ID
    /// * `definition_id` - The definition ID
    ///
    /// # Returns
    /// The definition, or [`ClientError::NotFound`] if it does not exist or
    /// is not visible to the token's identity
    pub async fn get_definition(
        &self,
        project: &str,
        definition_id: i32,
    ) -> Result<BuildDefinition> {
        let id = definition_id.to_string();
        let url = self.endpoint([project, "_apis", "build", "definitions", id.as_str()])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response).await.map_err(|e| {
            if e.is_not_found() {
                ClientError::NotFound(format!(
                    "Build definition {} in project '{}'",
                    definition_id, project
                ))
            } else {
                e
            }
        })
    }

    // =============================================================================
    // Builds
    // =============================================================================

    /// Queue a new build
    ///
    /// # Arguments
    /// * `project` - Project name or ID the build is queued in
    /// * `build` - The definition reference and parameters
    ///
    /// # Returns
    /// The queued build as reported by the server
    pub async fn queue_build(&self, project: &str, build: &QueueBuild) -> Result<Build> {
        let url = self.endpoint([project, "_apis", "build", "builds"])?;
        let response = self.request(Method::POST, url).json(build).send().await?;

        self.handle_response(response).await
    }
}
