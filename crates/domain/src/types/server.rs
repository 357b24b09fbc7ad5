use serde::{Deserialize, Serialize};

/// Server status returned by the unauthenticated root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Whether the request that produced this snapshot was authenticated
    pub authenticated: bool,
    /// Status string, `"OK"` when the plugin is healthy
    pub ok: String,
    pub service: String,
    pub versions: Versions,
}

/// Host application and plugin versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    pub obsidian: String,
    #[serde(rename = "self")]
    pub plugin: String,
}
