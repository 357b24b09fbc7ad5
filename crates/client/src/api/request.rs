//! Request and response plumbing shared by every service.

use obsidian_rest_domain::{ApiErrorPayload, ObsidianError, ResourceKind, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::conversions::decode_json;
use crate::errors::TransportError;

/// One logical API call before authentication is applied.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    authenticated: bool,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, url: Url) -> Self {
        Self { method, url, headers: HeaderMap::new(), body: None, authenticated: true }
    }

    /// Skip the authenticator and request editors for this call.
    pub(crate) fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub(crate) fn header(mut self, name: HeaderName, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    pub(crate) fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    pub(crate) fn body(self, content_type: &'static str, body: Vec<u8>) -> Self {
        let mut this = self.header(CONTENT_TYPE, content_type);
        this.body = Some(body);
        this
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn into_request(self) -> Request {
        let mut request = Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        request
    }
}

/// What a 404 means for the operation, if anything special.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotFound<'a> {
    pub kind: ResourceKind,
    pub name: &'a str,
}

/// Check `response` against `expected` and decode its JSON body.
pub(crate) async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
    not_found: Option<NotFound<'_>>,
) -> Result<T> {
    let response = check_status(response, expected, not_found).await?;
    let bytes = response.bytes().await.map_err(|e| ObsidianError::from(TransportError::from(e)))?;
    decode_json(&bytes)
}

/// Check `response` against `expected`, discarding the body.
pub(crate) async fn expect_empty(
    response: Response,
    expected: StatusCode,
    not_found: Option<NotFound<'_>>,
) -> Result<()> {
    check_status(response, expected, not_found).await.map(drop)
}

async fn check_status(
    response: Response,
    expected: StatusCode,
    not_found: Option<NotFound<'_>>,
) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(NotFound { kind, name }) = not_found {
            return Err(ObsidianError::not_found(kind, name));
        }
    }

    // Best effort: the plugin usually explains failures with a small JSON body.
    let payload = response
        .bytes()
        .await
        .ok()
        .and_then(|bytes| serde_json::from_slice::<ApiErrorPayload>(&bytes).ok());

    Err(ObsidianError::UnexpectedStatus { status: status.as_u16(), payload })
}
