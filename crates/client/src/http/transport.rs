use async_trait::async_trait;
use obsidian_rest_domain::Result;
use reqwest::{Request, Response};

/// Executes fully-formed requests.
///
/// Implementations must be safe to share between concurrent callers. The
/// client never retries, so a transport should surface failures as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the raw response, whatever its status.
    async fn execute(&self, request: Request) -> Result<Response>;
}
