//! API key authentication
//!
//! The Local REST API authenticates every call except the status probe with
//! a static bearer token copied from the plugin's settings page.

use obsidian_rest_domain::{ObsidianError, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;

/// Hook that can modify an outgoing authenticated request
///
/// The client runs its [`ApiKeyAuth`] first, then every editor registered
/// through [`ClientBuilder::request_editor`](super::ClientBuilder::request_editor),
/// in registration order. The status probe skips all of them.
pub trait RequestEditor: Send + Sync {
    /// Modify `request` in place.
    fn edit(&self, request: &mut Request) -> Result<()>;
}

/// Injects `Authorization: Bearer <key>` into requests
#[derive(Clone)]
pub struct ApiKeyAuth {
    header: HeaderValue,
}

impl ApiKeyAuth {
    /// Create an authenticator for `api_key`.
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::Config` if the key is empty or contains bytes
    /// that cannot appear in an HTTP header.
    pub fn new(api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(ObsidianError::Config("apikey is required".to_string()));
        }

        let mut header = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            ObsidianError::Config("apikey contains characters not allowed in a header".to_string())
        })?;
        header.set_sensitive(true);

        Ok(Self { header })
    }
}

impl RequestEditor for ApiKeyAuth {
    fn edit(&self, request: &mut Request) -> Result<()> {
        request.headers_mut().insert(AUTHORIZATION, self.header.clone());
        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth").finish_non_exhaustive()
    }
}
