//! Integration tests for vault file operations against a mock plugin.

mod support;

use obsidian_rest_client::{ObsidianError, ResourceKind};
use serde_json::json;
use support::{bearer, setup, InMemoryVault};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// get_file
// ============================================================================

#[tokio::test]
async fn get_file_decodes_note_document() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vault/projects/plan.md"))
        .and(header("authorization", bearer().as_str()))
        .and(header("accept", "application/vnd.olrapi.note+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "---\nstatus: draft\n---\n# Plan\n#work",
            "frontmatter": { "status": "draft", "priority": 2 },
            "path": "projects/plan.md",
            "stat": { "ctime": 1_700_000_000_000_i64, "mtime": 1_700_000_100_000_i64, "size": 38 },
            "tags": ["work"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let note = client.vault().get_file("projects/plan.md").await.unwrap();

    assert_eq!(note.path, "projects/plan.md");
    assert_eq!(note.tags, vec!["work".to_string()]);
    assert_eq!(note.stat.size, 38);
    assert_eq!(note.stat.mtime, 1_700_000_100_000);
    assert_eq!(note.frontmatter_value("status"), Some(&json!("draft")));
    assert_eq!(note.frontmatter_value("priority"), Some(&json!(2)));
}

#[tokio::test]
async fn get_file_missing_reports_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vault/nope.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.vault().get_file("nope.md").await.unwrap_err();
    assert_eq!(err, ObsidianError::not_found(ResourceKind::File, "nope.md"));
    assert_eq!(err.to_string(), "file not found: nope.md");
}

#[tokio::test]
async fn get_file_server_error_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "errorCode": 50000, "message": "boom" })),
        )
        .mount(&server)
        .await;

    let err = client.vault().get_file("a.md").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().starts_with("unexpected status code: 500"));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn get_file_malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.vault().get_file("a.md").await.unwrap_err();
    assert!(matches!(err, ObsidianError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn paths_with_spaces_are_percent_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/vault/Daily%20Notes/2024-01-01.md"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.vault().delete_file("Daily Notes/2024-01-01.md").await.unwrap();
}

#[tokio::test]
async fn escaping_paths_never_reach_the_server() {
    let (server, client) = setup().await;

    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    for bad in ["", "/", "../secrets.md", "notes/../../x.md"] {
        let err = client.vault().get_file(bad).await.unwrap_err();
        assert!(matches!(err, ObsidianError::InvalidInput(_)), "{bad:?} gave {err:?}");
    }
}

// ============================================================================
// list_directory
// ============================================================================

#[tokio::test]
async fn list_root_directory() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vault/"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "files": ["inbox.md", "projects/", "archive/"] })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let listing = client.vault().list_directory("").await.unwrap();
    assert_eq!(listing.files, vec!["inbox.md", "projects/", "archive/"]);
    assert_eq!(listing.directories().collect::<Vec<_>>(), vec!["projects/", "archive/"]);

    client.vault().list_directory("/").await.unwrap();
}

#[tokio::test]
async fn list_subdirectory_sends_trailing_slash() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vault/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": ["plan.md"] })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client.vault().list_directory("projects").await.unwrap();
    assert_eq!(listing.files, vec!["plan.md"]);
}

#[tokio::test]
async fn list_missing_directory_reports_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

    let err = client.vault().list_directory("ghosts").await.unwrap_err();
    assert_eq!(err, ObsidianError::not_found(ResourceKind::Directory, "ghosts"));
    assert!(err.to_string().contains("ghosts"));
}

#[tokio::test]
async fn list_missing_root_names_the_root() {
    let (server, client) = setup().await;

    Mock::given(method("GET")).and(path("/vault/")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

    let err = client.vault().list_directory("").await.unwrap_err();
    assert_eq!(err, ObsidianError::not_found(ResourceKind::Directory, "/"));
    assert_eq!(err.to_string(), "directory not found: /");
}

#[tokio::test]
async fn list_missing_directory_names_cleaned_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

    let err = client.vault().list_directory("/projects//old/./").await.unwrap_err();
    assert_eq!(err, ObsidianError::not_found(ResourceKind::Directory, "projects/old"));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn create_sends_markdown_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/vault/inbox.md"))
        .and(header("authorization", bearer().as_str()))
        .and(header("content-type", "text/markdown"))
        .and(body_string("# Inbox\n- [ ] call Sam\n"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.vault().create_or_update_file("inbox.md", "# Inbox\n- [ ] call Sam\n").await.unwrap();
}

#[tokio::test]
async fn create_with_wrong_success_code_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("PUT")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    let err = client.vault().create_or_update_file("a.md", "x").await.unwrap_err();
    assert_eq!(err, ObsidianError::unexpected_status(200));
}

#[tokio::test]
async fn append_posts_markdown_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/vault/log.md"))
        .and(header("content-type", "text/markdown"))
        .and(body_string("\n- entry"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.vault().append_to_file("log.md", "\n- entry").await.unwrap();
}

#[tokio::test]
async fn delete_failure_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/vault/locked.md"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;

    let err = client.vault().delete_file("locked.md").await.unwrap_err();
    assert_eq!(err.status(), Some(405));
}

// ============================================================================
// Round trips
// ============================================================================

#[tokio::test]
async fn written_content_reads_back_identically() {
    let (server, client) = setup().await;
    let vault = InMemoryVault::mount(&server).await;

    let content = "---\ntitle: Round trip\n---\n\nUnicode ✓ and trailing space \n";
    client.vault().create_or_update_file("round.md", content).await.unwrap();

    let note = client.vault().get_file("round.md").await.unwrap();
    assert_eq!(note.content, content);
    assert_eq!(vault.content("round.md").as_deref(), Some(content));
}

#[tokio::test]
async fn append_extends_existing_content() {
    let (server, client) = setup().await;
    let vault = InMemoryVault::mount(&server).await;

    client.vault().create_or_update_file("journal.md", "# Journal\n").await.unwrap();
    client.vault().append_to_file("journal.md", "- woke up\n").await.unwrap();
    client.vault().append_to_file("journal.md", "- coffee\n").await.unwrap();

    assert_eq!(vault.content("journal.md").as_deref(), Some("# Journal\n- woke up\n- coffee\n"));
}

#[tokio::test]
async fn deleted_file_is_gone() {
    let (server, client) = setup().await;
    InMemoryVault::mount(&server).await;

    client.vault().create_or_update_file("tmp.md", "scratch").await.unwrap();
    client.vault().delete_file("tmp.md").await.unwrap();

    let err = client.vault().get_file("tmp.md").await.unwrap_err();
    assert_eq!(err.category(), obsidian_rest_client::ErrorCategory::NotFound);
}
