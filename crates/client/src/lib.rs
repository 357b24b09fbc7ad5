//! # Obsidian REST Client
//!
//! Typed async client for the Obsidian Local REST API plugin.
//!
//! This crate contains:
//! - The reqwest-backed transport and its TLS/timeout settings
//! - API key authentication
//! - Status, vault, search and command operations
//!
//! ## Architecture
//! - Wire types and errors live in `obsidian-rest-domain` and are re-exported
//! - Contains all the I/O; the domain crate stays pure
//!
//! ```no_run
//! use obsidian_rest_client::ObsidianClient;
//!
//! # async fn example() -> obsidian_rest_client::Result<()> {
//! let client = ObsidianClient::builder()
//!     .api_key("your-api-key")
//!     .base_url("http://127.0.0.1:27123")
//!     .build()?;
//!
//! client.vault().create_or_update_file("inbox.md", "# Inbox\n").await?;
//! let note = client.vault().get_file("inbox.md").await?;
//! assert_eq!(note.content, "# Inbox\n");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::*;
pub use http::{HttpClient, HttpClientBuilder, Transport};
pub use obsidian_rest_domain::*;
