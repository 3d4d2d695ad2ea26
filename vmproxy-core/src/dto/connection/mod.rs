//! Connection DTOs
//!
//! Response of `GET {collection}/_apis/connectionData`, used to confirm that
//! the access token was accepted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Connection data returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    #[serde(default)]
    pub authenticated_user: Option<IdentityRef>,
    #[serde(default)]
    pub authorized_user: Option<IdentityRef>,
    #[serde(default)]
    pub instance_id: Option<Uuid>,
}

impl ConnectionData {
    /// Whether the server attributed the request to a real identity
    ///
    /// Anonymous requests come back with a nil identity id.
    pub fn has_authenticated(&self) -> bool {
        self.authenticated_user
            .as_ref()
            .is_some_and(|user| !user.id.is_nil())
    }
}

/// Identity the server resolved the credentials to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    pub id: Uuid,
    #[serde(default)]
    pub provider_display_name: Option<String>,
}
