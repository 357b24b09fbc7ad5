//! Error types used throughout the client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ApiErrorPayload;

/// Main error type for the Obsidian REST client
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ObsidianError {
    /// Invalid construction-time configuration (API key, server URL, TLS).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure reported by the transport.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 404 for a file, directory or command.
    #[error("{kind} not found: {name}")]
    NotFound { kind: ResourceKind, name: String },

    /// The server answered with a status the operation does not handle.
    #[error("unexpected status code: {status}{}", describe_payload(.payload))]
    UnexpectedStatus { status: u16, payload: Option<ApiErrorPayload> },

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The caller passed something the API cannot accept; no request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The caller's cancellation signal fired before the call completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// The caller's deadline elapsed before the call completed.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

fn describe_payload(payload: &Option<ApiErrorPayload>) -> String {
    match payload {
        Some(p) => format!(" (error {}: {})", p.error_code, p.message),
        None => String::new(),
    }
}

/// The resource a [`ObsidianError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    File,
    Directory,
    Command,
}

crate::impl_wire_tag_conversions!(ResourceKind {
    File => "file",
    Directory => "directory",
    Command => "command",
});

/// Coarse classification of an [`ObsidianError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised synchronously while building the client
    Configuration,
    /// Connection refused, TLS failure, transport timeout
    Transport,
    /// Remote 404 on a named resource
    NotFound,
    /// Any other unhandled status code
    Status,
    /// Body present but not the expected shape
    Decode,
    /// Rejected before reaching the network
    Input,
    /// Cancelled or timed out by the caller
    Aborted,
}

impl ObsidianError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Network(_) => ErrorCategory::Transport,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::UnexpectedStatus { .. } => ErrorCategory::Status,
            Self::Decode(_) => ErrorCategory::Decode,
            Self::InvalidInput(_) => ErrorCategory::Input,
            Self::Cancelled | Self::Timeout(_) => ErrorCategory::Aborted,
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Shorthand for an [`ObsidianError::UnexpectedStatus`] without a payload.
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status, payload: None }
    }

    /// Shorthand for an [`ObsidianError::NotFound`].
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self::NotFound { kind, name: name.into() }
    }
}

/// Result type alias for Obsidian REST operations
pub type Result<T> = std::result::Result<T, ObsidianError>;
