//! Wire types exchanged with the Local REST API
//!
//! Every type here is a read-only snapshot of what the server returned at
//! the time of the call; none of them hold a handle back to the client.

mod commands;
mod note;
mod search;
mod server;

use serde::{Deserialize, Serialize};

pub use commands::{Command, CommandList};
pub use note::{DirectoryListing, Note, NoteStat};
pub use search::{
    QueryType, SearchMatch, SearchMatchSpan, SearchQuery, SearchResult, SimpleSearchOptions,
    SimpleSearchResult,
};
pub use server::{ServerInfo, Versions};

/// Structured failure body returned by the API alongside error statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorPayload {
    pub error_code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_uses_camel_case() {
        let payload: ApiErrorPayload =
            serde_json::from_str(r#"{"errorCode": 40400, "message": "File not found"}"#).unwrap();
        assert_eq!(payload.error_code, 40400);
        assert_eq!(payload.message, "File not found");
    }
}
