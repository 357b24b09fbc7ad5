use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use obsidian_rest_domain::constants::DEFAULT_TIMEOUT_SECS;
use obsidian_rest_domain::{ObsidianError, Result, TransportSettings};
use reqwest::{Certificate, Client as ReqwestClient, Request, Response};
use tracing::debug;

use super::transport::Transport;
use crate::errors::TransportError;

/// Default reqwest-backed transport with timeout and TLS policy support.
///
/// Requests are sent exactly once; there is no retry loop.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Build a client from serializable transport settings.
    ///
    /// # Errors
    /// Returns `ObsidianError::Config` for a zero timeout, a CA certificate
    /// that cannot be read or parsed, or a client that cannot be built.
    pub fn from_settings(settings: &TransportSettings) -> Result<Self> {
        if settings.timeout_secs == 0 {
            return Err(ObsidianError::Config(
                "transport timeout must be at least 1 second".to_string(),
            ));
        }

        let mut builder = Self::builder()
            .timeout(settings.timeout())
            .accept_invalid_certs(settings.accept_invalid_certs);

        if let Some(agent) = &settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        if let Some(path) = &settings.ca_cert_path {
            builder = builder.root_certificate_file(path)?;
        }

        builder.build()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(TransportError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    root_certificates: Vec<Certificate>,
    accept_invalid_certs: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            root_certificates: Vec::new(),
            accept_invalid_certs: false,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Trust an additional root certificate.
    pub fn root_certificate(mut self, certificate: Certificate) -> Self {
        self.root_certificates.push(certificate);
        self
    }

    /// Trust the PEM certificate stored at `path`.
    ///
    /// The plugin exposes its certificate at `/obsidian-local-rest-api.crt`;
    /// saving that file and pointing here avoids disabling validation.
    pub fn root_certificate_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|e| {
            ObsidianError::Config(format!(
                "Failed to read CA certificate {}: {}",
                path.display(),
                e
            ))
        })?;
        let certificate = Certificate::from_pem(&pem)
            .map_err(|e| ObsidianError::Config(format!("Invalid CA certificate: {}", e)))?;
        Ok(self.root_certificate(certificate))
    }

    /// Accept self-signed or otherwise invalid certificates.
    ///
    /// Only meant for the plugin's default self-signed setup on loopback.
    pub fn accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.accept_invalid_certs = enabled;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        let agent = self
            .user_agent
            .unwrap_or_else(|| concat!("obsidian-rest/", env!("CARGO_PKG_VERSION")).to_string());
        builder = builder.user_agent(agent);

        for certificate in self.root_certificates {
            builder = builder.add_root_certificate(certificate);
        }

        if self.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| ObsidianError::Config(format!("Failed to build HTTP client: {}", err)))?;

        Ok(HttpClient { client })
    }
}
