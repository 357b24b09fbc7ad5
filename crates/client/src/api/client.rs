//! Obsidian REST client
//!
//! Composition root: owns the base URL, the transport and the authenticator,
//! and hands out the four service facades.

use std::fmt;
use std::sync::Arc;

use obsidian_rest_domain::constants::DEFAULT_BASE_URL;
use obsidian_rest_domain::{ClientConfig, ObsidianError, Result, TransportSettings};
use reqwest::Response;
use tracing::debug;
use url::Url;

use super::auth::{ApiKeyAuth, RequestEditor};
use super::commands::CommandService;
use super::request::ApiRequest;
use super::search::SearchService;
use super::status::StatusService;
use super::vault::VaultService;
use crate::http::{HttpClient, Transport};

/// Client for the Obsidian Local REST API
///
/// Cheap to clone; clones share the same transport. Safe to use from many
/// tasks at once.
#[derive(Clone)]
pub struct ObsidianClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: Url,
    transport: Arc<dyn Transport>,
    auth: ApiKeyAuth,
    editors: Vec<Arc<dyn RequestEditor>>,
}

impl ObsidianClient {
    /// Create a client for the default local endpoint (`https://127.0.0.1:27124`).
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::Config` if `api_key` is empty or the default
    /// transport cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::Config` for an empty key, a server URL without
    /// scheme or host, or an unusable TLS setup.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::builder()
            .api_key(config.api_key.clone())
            .base_url(config.base_url.clone())
            .transport_settings(config.transport.clone())
            .build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Server status (unauthenticated).
    pub fn status(&self) -> StatusService<'_> {
        StatusService::new(self)
    }

    /// File and directory operations.
    pub fn vault(&self) -> VaultService<'_> {
        VaultService::new(self)
    }

    /// Full-text and structured search.
    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    /// Editor commands.
    pub fn commands(&self) -> CommandService<'_> {
        CommandService::new(self)
    }

    /// Base URL every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Base URL extended with `segments`, each percent-encoded.
    ///
    /// A trailing empty segment produces a trailing `/`.
    pub(crate) fn endpoint<I, S>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ObsidianError::Config(format!("base URL cannot have a path: {}", self.inner.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Authenticate (unless the request opted out) and send `request`.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<Response> {
        let authenticated = request.is_authenticated();
        let mut request = request.into_request();

        if authenticated {
            self.inner.auth.edit(&mut request)?;
            for editor in &self.inner.editors {
                editor.edit(&mut request)?;
            }
        }

        debug!(method = %request.method(), url = %request.url(), authenticated, "dispatching API request");
        self.inner.transport.execute(request).await
    }
}

impl fmt::Debug for ObsidianClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObsidianClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("request_editors", &self.inner.editors.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ObsidianClient`]
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    settings: TransportSettings,
    editors: Vec<Arc<dyn RequestEditor>>,
}

impl ClientBuilder {
    /// Set the API key (required)
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the server address
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the default [`HttpClient`] transport
    ///
    /// Transport settings are ignored when a transport is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Settings for the default transport
    pub fn transport_settings(mut self, settings: TransportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Register an extra editor for authenticated requests
    pub fn request_editor(mut self, editor: Arc<dyn RequestEditor>) -> Self {
        self.editors.push(editor);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::Config` if the key is missing or empty, the
    /// server URL lacks a scheme or host, or the transport cannot be built.
    /// Nothing touches the network.
    pub fn build(self) -> Result<ObsidianClient> {
        let auth = ApiKeyAuth::new(self.api_key.as_deref().unwrap_or_default())?;

        let raw_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = parse_base_url(raw_url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::from_settings(&self.settings)?),
        };

        Ok(ObsidianClient {
            inner: Arc::new(ClientInner { base_url, transport, auth, editors: self.editors }),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ObsidianError::Config(format!("invalid server URL {:?}: {}", raw, e)))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ObsidianError::Config(format!(
            "invalid server URL {:?}: missing scheme or host",
            raw
        )));
    }

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ObsidianError::Config(format!(
            "invalid server URL {:?}: unsupported scheme {}",
            raw,
            url.scheme()
        )));
    }

    Ok(url)
}
