//! Obsidian Local REST API client
//!
//! [`ObsidianClient`] is the single entry point. It owns the transport and
//! the API key authenticator and hands out four borrowed facades:
//!
//! - [`StatusService`]: `GET /` (the only unauthenticated call)
//! - [`VaultService`]: read, write, append, delete and list under `/vault/`
//! - [`SearchService`]: `/search/simple` and DQL/JsonLogic `/search`
//! - [`CommandService`]: list and execute editor commands
//!
//! # Architecture
//!
//! - Every operation is one HTTP round trip through the [`Transport`](crate::http::Transport)
//! - No retries, no caching: failures go straight back to the caller
//! - Structured tracing only; the API key and request bodies are never logged

pub mod auth;
pub mod cancel;
pub mod client;
pub mod commands;
pub mod paths;
pub(crate) mod request;
pub mod search;
pub mod status;
pub mod vault;

pub use auth::{ApiKeyAuth, RequestEditor};
pub use cancel::{with_cancellation, with_deadline};
pub use client::{ClientBuilder, ObsidianClient};
pub use commands::CommandService;
pub use paths::clean_path;
pub use search::SearchService;
pub use status::StatusService;
pub use vault::VaultService;
