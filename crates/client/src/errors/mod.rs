//! Error plumbing between reqwest and [`ObsidianError`](obsidian_rest_domain::ObsidianError).

pub mod conversions;

pub use conversions::TransportError;
