//! Protocol constants
//!
//! Centralized location for the endpoint defaults, paths and media types the
//! Local REST API plugin understands.

// Endpoint defaults
pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1:27124";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Path prefixes (relative to the base URL)
pub const VAULT_SEGMENT: &str = "vault";
pub const SEARCH_SEGMENT: &str = "search";
pub const SIMPLE_SEARCH_SEGMENT: &str = "simple";
pub const COMMANDS_SEGMENT: &str = "commands";

// Media types
pub const MEDIA_TYPE_NOTE_JSON: &str = "application/vnd.olrapi.note+json";
pub const MEDIA_TYPE_MARKDOWN: &str = "text/markdown";
pub const MEDIA_TYPE_DQL: &str = "application/vnd.olrapi.dataview.dql+txt";
pub const MEDIA_TYPE_JSONLOGIC: &str = "application/vnd.olrapi.jsonlogic+json";

// Simple search query parameters
pub const QUERY_PARAM: &str = "query";
pub const CONTEXT_LENGTH_PARAM: &str = "contextLength";
