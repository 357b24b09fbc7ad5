//! Server status probe

use obsidian_rest_domain::{Result, ServerInfo};
use reqwest::{Method, StatusCode};
use tracing::instrument;

use super::client::ObsidianClient;
use super::request::{expect_json, ApiRequest};

/// Status operations
#[derive(Debug, Clone, Copy)]
pub struct StatusService<'a> {
    client: &'a ObsidianClient,
}

impl<'a> StatusService<'a> {
    pub(crate) fn new(client: &'a ObsidianClient) -> Self {
        Self { client }
    }

    /// Basic details about the server and whether the caller is authenticated.
    ///
    /// This is the only endpoint that works without credentials, and it is
    /// always sent without them: no `Authorization` header, no request
    /// editors.
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::UnexpectedStatus` for anything but 200,
    /// `ObsidianError::Network` if the server is unreachable.
    #[instrument(skip(self))]
    pub async fn get_status(&self) -> Result<ServerInfo> {
        let request =
            ApiRequest::new(Method::GET, self.client.base_url().clone()).unauthenticated();
        let response = self.client.send(request).await?;
        expect_json(response, StatusCode::OK, None).await
    }
}
