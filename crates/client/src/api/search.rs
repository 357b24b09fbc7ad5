//! Search operations

use obsidian_rest_domain::constants::{
    CONTEXT_LENGTH_PARAM, QUERY_PARAM, SEARCH_SEGMENT, SIMPLE_SEARCH_SEGMENT,
};
use obsidian_rest_domain::{
    Result, SearchQuery, SearchResult, SimpleSearchOptions, SimpleSearchResult,
};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::ObsidianClient;
use super::request::{expect_json, ApiRequest};

/// Search operations
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    client: &'a ObsidianClient,
}

impl<'a> SearchService<'a> {
    pub(crate) fn new(client: &'a ObsidianClient) -> Self {
        Self { client }
    }

    /// Full-text search across the vault.
    ///
    /// `contextLength` is only sent when `options` asks for a positive
    /// length; otherwise the server picks its own default. Match spans in the
    /// results are offsets into each match's context snippet.
    #[instrument(skip(self, options), fields(query = %query))]
    pub async fn simple_search(
        &self,
        query: &str,
        options: Option<SimpleSearchOptions>,
    ) -> Result<Vec<SimpleSearchResult>> {
        let url = self.client.endpoint([SEARCH_SEGMENT, SIMPLE_SEARCH_SEGMENT])?;
        let mut request = ApiRequest::new(Method::POST, url).query(QUERY_PARAM, query);

        if let Some(length) = options.and_then(|o| o.context_length_param()) {
            request = request.query(CONTEXT_LENGTH_PARAM, &length.to_string());
        }

        let response = self.client.send(request).await?;
        let results: Vec<SimpleSearchResult> = expect_json(response, StatusCode::OK, None).await?;

        debug!(hits = results.len(), "Simple search complete");
        Ok(results)
    }

    /// Structured search with a DQL or JsonLogic query.
    ///
    /// The body and `Content-Type` follow the query language. Each result's
    /// `result` payload is returned untouched.
    #[instrument(skip(self, query), fields(query_type = %query.query_type()))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let body = query.to_body()?;
        let url = self.client.endpoint([SEARCH_SEGMENT])?;
        let request = ApiRequest::new(Method::POST, url)
            .body(query.query_type().content_type(), body);

        let response = self.client.send(request).await?;
        let results: Vec<SearchResult> = expect_json(response, StatusCode::OK, None).await?;

        debug!(hits = results.len(), "Search complete");
        Ok(results)
    }

    /// [`search`](Self::search) with the query language given as a string
    /// tag (`"dql"` or `"jsonlogic"`).
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::InvalidInput` for any other tag, or a DQL
    /// query that is not a string, without sending anything.
    pub async fn search_tagged(&self, query_type: &str, query: Value) -> Result<Vec<SearchResult>> {
        let query = SearchQuery::from_tagged(query_type, query)?;
        self.search(&query).await
    }
}
