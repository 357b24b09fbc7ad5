//! # Obsidian REST Domain
//!
//! Types shared by every layer of the Obsidian Local REST API client.
//!
//! This crate contains:
//! - Wire types decoded from (or sent to) the REST API (notes, listings,
//!   search results, commands, server info)
//! - The error type and `Result` alias used by every operation
//! - Client configuration structures
//! - Protocol constants (media types, default endpoint)
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O: everything here is a plain value

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
