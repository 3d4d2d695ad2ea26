//! Connection-related API endpoints

use crate::DevOpsClient;
use crate::error::Result;
use reqwest::Method;
use vmproxy_core::dto::connection::ConnectionData;

impl DevOpsClient {
    /// Fetch connection data for the current credentials
    ///
    /// One round-trip that tells which identity the server attributed the
    /// request to. A successful response does not by itself mean the token
    /// was accepted; check [`ConnectionData::has_authenticated`].
    pub async fn connection_data(&self) -> Result<ConnectionData> {
        let url = self.endpoint(["_apis", "connectionData"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response).await
    }
}
