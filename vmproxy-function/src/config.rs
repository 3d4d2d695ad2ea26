//! Function configuration
//!
//! Settings are read once at startup, from command-line flags or (the usual
//! case under the Functions host) from application settings exposed as
//! environment variables. Missing or unparsable values abort startup.

use clap::Parser;
use std::fmt;
use vmproxy_core::domain::pipeline::PipelineIds;

/// Hosted Azure DevOps organizations live under this URL
const HOSTED_SERVER_URL: &str = "https://dev.azure.com";

/// Function configuration
#[derive(Clone, Parser)]
#[command(name = "vmproxy")]
#[command(about = "Queues VM builds on Azure DevOps on behalf of HTTP callers", long_about = None)]
pub struct Config {
    /// Azure DevOps organization (account) name
    #[arg(long, env = "VstsAccount")]
    pub account: String,

    /// Project collection, used with an on-premises server URL
    #[arg(long, env = "VstsProjectCollection")]
    pub project_collection: String,

    /// Team project holding both build definitions
    #[arg(long, env = "VstsProject")]
    pub project: String,

    /// Personal access token
    #[arg(long, env = "VstsToken", hide_env_values = true)]
    pub token: String,

    /// Build definition queued for every environment except Redhat
    #[arg(long, env = "VstsWindowsBuildDefId")]
    pub windows_build_def_id: i32,

    /// Build definition queued for the Redhat environment
    #[arg(long, env = "VstsRedhatBuildDefId")]
    pub redhat_build_def_id: i32,

    /// On-premises server URL (e.g., "https://tfs.example/tfs")
    #[arg(long, env = "VstsServerUrl")]
    pub on_premises_url: Option<String>,

    /// Port the Functions host forwards requests to
    #[arg(long, env = "FUNCTIONS_CUSTOMHANDLER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    /// URL of the organization or project collection to connect to
    ///
    /// Hosted: `https://dev.azure.com/{account}`.
    /// On-premises: `{on_premises_url}/{project_collection}`.
    pub fn server_url(&self) -> String {
        match &self.on_premises_url {
            Some(server) => format!(
                "{}/{}",
                server.trim_end_matches('/'),
                self.project_collection
            ),
            None => format!("{}/{}", HOSTED_SERVER_URL, self.account),
        }
    }

    /// Build definition ids for both pipelines
    pub fn pipelines(&self) -> PipelineIds {
        PipelineIds::new(self.windows_build_def_id, self.redhat_build_def_id)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.account.trim().is_empty() {
            anyhow::bail!("account cannot be empty");
        }

        if self.project_collection.trim().is_empty() {
            anyhow::bail!("project_collection cannot be empty");
        }

        if self.project.trim().is_empty() {
            anyhow::bail!("project cannot be empty");
        }

        if self.token.is_empty() {
            anyhow::bail!("token cannot be empty");
        }

        if self.windows_build_def_id <= 0 {
            anyhow::bail!("windows_build_def_id must be greater than 0");
        }

        if self.redhat_build_def_id <= 0 {
            anyhow::bail!("redhat_build_def_id must be greater than 0");
        }

        if let Some(url) = &self.on_premises_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("on_premises_url must start with http:// or https://");
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("project_collection", &self.project_collection)
            .field("project", &self.project)
            .field("token", &"<redacted>")
            .field("windows_build_def_id", &self.windows_build_def_id)
            .field("redhat_build_def_id", &self.redhat_build_def_id)
            .field("on_premises_url", &self.on_premises_url)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 13] = [
        "vmproxy",
        "--account",
        "acme",
        "--project-collection",
        "DefaultCollection",
        "--project",
        "Infra",
        "--token",
        "pat",
        "--windows-build-def-id",
        "12",
        "--redhat-build-def-id",
        "34",
    ];

    #[test]
    fn test_parse_from_args() {
        let config = Config::try_parse_from(REQUIRED).unwrap();
        assert_eq!(config.account, "acme");
        assert_eq!(config.pipelines(), PipelineIds::new(12, 34));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unparsable_id_is_rejected() {
        let mut args = REQUIRED.to_vec();
        args[10] = "twelve";
        assert!(Config::try_parse_from(args).is_err());
    }

    #[test]
    fn test_hosted_server_url() {
        let config = Config::try_parse_from(REQUIRED).unwrap();
        assert_eq!(config.server_url(), "https://dev.azure.com/acme");
    }

    #[test]
    fn test_on_premises_server_url() {
        let mut config = Config::try_parse_from(REQUIRED).unwrap();
        config.on_premises_url = Some("https://tfs.example/tfs/".to_string());
        assert_eq!(
            config.server_url(),
            "https://tfs.example/tfs/DefaultCollection"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::try_parse_from(REQUIRED).unwrap();

        config.project = " ".to_string();
        assert!(config.validate().is_err());
        config.project = "Infra".to_string();

        config.redhat_build_def_id = 0;
        assert!(config.validate().is_err());
        config.redhat_build_def_id = 34;

        config.on_premises_url = Some("tfs.example".to_string());
        assert!(config.validate().is_err());
        config.on_premises_url = None;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config::try_parse_from(REQUIRED).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"pat\""));
    }
}
