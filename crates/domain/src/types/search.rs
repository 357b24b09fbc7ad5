//! Search requests and results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{MEDIA_TYPE_DQL, MEDIA_TYPE_JSONLOGIC};
use crate::errors::{ObsidianError, Result};

/// A hit from the advanced search endpoint
///
/// `result` is query-dependent: a DQL `TABLE` query yields an object of
/// column values, a JsonLogic query yields whatever the expression evaluated
/// to. The client does not interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub filename: String,
    pub result: Value,
}

/// A hit from the simple (full-text) search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleSearchResult {
    pub filename: String,
    pub score: f64,
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// One match inside a file, with the snippet that surrounds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub context: String,
    #[serde(rename = "match")]
    pub span: SearchMatchSpan,
}

impl SearchMatch {
    /// The matched text, sliced out of `context`.
    ///
    /// Offsets count characters, not bytes. Returns `None` when the span
    /// does not fit inside the snippet.
    pub fn matched_text(&self) -> Option<String> {
        let SearchMatchSpan { start, end } = self.span;
        if start > end || end > self.context.chars().count() {
            return None;
        }
        Some(self.context.chars().skip(start).take(end - start).collect())
    }
}

/// Character offsets of a match within [`SearchMatch::context`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Options for the simple search endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleSearchOptions {
    /// Characters of context around each match. Zero means "server default"
    /// and is not sent.
    pub context_length: u32,
}

impl SimpleSearchOptions {
    pub fn with_context_length(context_length: u32) -> Self {
        Self { context_length }
    }

    /// The value to send as `contextLength`, if any.
    pub fn context_length_param(&self) -> Option<u32> {
        (self.context_length > 0).then_some(self.context_length)
    }
}

/// Query languages accepted by `POST /search`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// Dataview query language, sent as plain text
    Dql,
    /// JsonLogic expression, sent as JSON
    JsonLogic,
}

crate::impl_wire_tag_conversions!(QueryType {
    Dql => "dql",
    JsonLogic => "jsonlogic",
});

impl QueryType {
    /// Request media type announcing this query language.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Dql => MEDIA_TYPE_DQL,
            Self::JsonLogic => MEDIA_TYPE_JSONLOGIC,
        }
    }
}

/// An advanced search query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// e.g. `TABLE file.mtime FROM "daily" SORT file.mtime DESC`
    Dql(String),
    /// e.g. `{"glob": ["*.md", {"var": "path"}]}`
    JsonLogic(Value),
}

impl SearchQuery {
    pub fn dql(query: impl Into<String>) -> Self {
        Self::Dql(query.into())
    }

    pub fn json_logic(expression: Value) -> Self {
        Self::JsonLogic(expression)
    }

    /// Build a query from a string tag and an untyped payload.
    ///
    /// `"dql"` requires a JSON string; `"jsonlogic"` accepts any JSON value.
    ///
    /// # Errors
    /// Returns `ObsidianError::InvalidInput` for an unknown tag or a DQL
    /// payload that is not a string.
    pub fn from_tagged(query_type: &str, query: Value) -> Result<Self> {
        match query_type.parse::<QueryType>()? {
            QueryType::Dql => match query {
                Value::String(text) => Ok(Self::Dql(text)),
                other => Err(ObsidianError::InvalidInput(format!(
                    "dql query must be a string, got {other}"
                ))),
            },
            QueryType::JsonLogic => Ok(Self::JsonLogic(query)),
        }
    }

    pub fn query_type(&self) -> QueryType {
        match self {
            Self::Dql(_) => QueryType::Dql,
            Self::JsonLogic(_) => QueryType::JsonLogic,
        }
    }

    /// Request body bytes: the literal text for DQL, serialized JSON for
    /// JsonLogic.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        match self {
            Self::Dql(text) => Ok(text.clone().into_bytes()),
            Self::JsonLogic(expression) => serde_json::to_vec(expression).map_err(|e| {
                ObsidianError::InvalidInput(format!("failed to serialize JsonLogic query: {e}"))
            }),
        }
    }
}
