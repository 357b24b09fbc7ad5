//! Caller-controlled cancellation and deadlines
//!
//! Any operation future can be wrapped with [`with_cancellation`] or
//! [`with_deadline`]. When the signal fires first, the in-flight request is
//! dropped (which aborts the underlying connection) and the call fails with
//! `ObsidianError::Cancelled` or `ObsidianError::Timeout`.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use obsidian_rest_client::{with_cancellation, with_deadline, ObsidianClient};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ObsidianClient::new("api-key")?;
//! let token = CancellationToken::new();
//!
//! let note = with_cancellation(&token, client.vault().get_file("inbox.md")).await?;
//! let hits = with_deadline(Duration::from_secs(2), client.search().simple_search("todo", None)).await?;
//! # let _ = (note, hits);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use obsidian_rest_domain::{ObsidianError, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Run `call` until it finishes or `token` is cancelled.
///
/// An already-cancelled token fails the call without polling it, so no
/// request is sent.
pub async fn with_cancellation<T, F>(token: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("API call cancelled by caller");
            Err(ObsidianError::Cancelled)
        }
        result = call => result,
    }
}

/// Run `call` for at most `deadline`.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            debug!(?deadline, "API call exceeded caller deadline");
            Err(ObsidianError::Timeout(deadline))
        }
    }
}
