//! HTTP transport layer.
//!
//! [`Transport`] is the seam the client talks to; [`HttpClient`] is the
//! default reqwest-backed implementation.

pub mod client;
pub mod transport;

pub use client::{HttpClient, HttpClientBuilder};
pub use transport::Transport;
