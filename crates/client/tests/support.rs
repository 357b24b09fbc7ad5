//! Shared fixtures for the client integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use obsidian_rest_client::{HttpClient, ObsidianClient, Result, Transport};
use reqwest::{Request, Response};
use serde_json::json;
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

pub const API_KEY: &str = "test-api-key-0123456789";

/// Route test logs through the libtest capture writer once per binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, ObsidianClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = client_for(&server);
    (server, client)
}

pub fn client_for(server: &MockServer) -> ObsidianClient {
    ObsidianClient::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client should build against the mock server")
}

pub fn bearer() -> String {
    format!("Bearer {}", API_KEY)
}

/// Transport wrapper that counts how many requests reach the wire.
pub struct CountingTransport {
    inner: HttpClient,
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: HttpClient::new().expect("default transport should build"),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.execute(request).await
    }
}

/// A tiny stand-in for the plugin's vault: PUT stores, POST appends, GET
/// returns a note document, DELETE removes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVault {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryVault {
    pub async fn mount(server: &MockServer) -> Self {
        let vault = Self::default();
        Mock::given(path_regex(r"^/vault/.+[^/]$")).respond_with(vault.clone()).mount(server).await;
        vault
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Respond for InMemoryVault {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let path = request.url.path().trim_start_matches("/vault/").to_string();
        let body = String::from_utf8_lossy(&request.body).into_owned();
        let mut files = self.files.lock().unwrap();

        match request.method.as_str() {
            "PUT" => {
                files.insert(path, body);
                ResponseTemplate::new(204)
            }
            "POST" => match files.get_mut(&path) {
                Some(existing) => {
                    existing.push_str(&body);
                    ResponseTemplate::new(204)
                }
                None => ResponseTemplate::new(404),
            },
            "DELETE" => match files.remove(&path) {
                Some(_) => ResponseTemplate::new(204),
                None => ResponseTemplate::new(404),
            },
            "GET" => match files.get(&path) {
                Some(content) => ResponseTemplate::new(200).set_body_json(json!({
                    "content": content,
                    "frontmatter": {},
                    "path": path,
                    "stat": { "ctime": 1_700_000_000_000_i64, "mtime": 1_700_000_000_000_i64, "size": content.len() },
                    "tags": []
                })),
                None => ResponseTemplate::new(404)
                    .set_body_json(json!({ "errorCode": 40400, "message": "File not found" })),
            },
            _ => ResponseTemplate::new(405),
        }
    }
}
