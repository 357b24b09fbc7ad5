//! Configuration management

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Client configuration
///
/// Constructed once by the caller and handed to the client builder. Nothing
/// mutates it after the client has been built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server address, e.g. `https://127.0.0.1:27124`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key shown in the plugin settings
    #[serde(skip_serializing, default)]
    pub api_key: String,
    #[serde(default)]
    pub transport: TransportSettings,
}

/// Settings for the default reqwest-backed transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Accept self-signed or otherwise invalid certificates.
    ///
    /// The plugin serves HTTPS with a self-signed certificate by default.
    pub accept_invalid_certs: bool,
    /// Extra PEM root certificate to trust (e.g. the plugin's own certificate)
    pub ca_cert_path: Option<PathBuf>,
    /// Overrides the `User-Agent` header
    pub user_agent: Option<String>,
}

impl TransportSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
            ca_cert_path: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Configuration for `api_key` against the default local endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            transport: TransportSettings::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_transport(mut self, transport: TransportSettings) -> Self {
        self.transport = transport;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// The key never shows up in logs or panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("transport", &self.transport)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
