//! Integration tests for editor command listing and execution.

mod support;

use obsidian_rest_client::{Command, ObsidianError, ResourceKind};
use serde_json::json;
use support::{bearer, setup};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_commands_preserves_server_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/commands"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commands": [
                { "id": "global-search:open", "name": "Search: Search in all files" },
                { "id": "editor:toggle-bold", "name": "Toggle bold" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let commands = client.commands().list().await.unwrap();
    assert_eq!(
        commands,
        vec![
            Command {
                id: "global-search:open".to_string(),
                name: "Search: Search in all files".to_string()
            },
            Command { id: "editor:toggle-bold".to_string(), name: "Toggle bold".to_string() },
        ]
    );
}

#[tokio::test]
async fn list_commands_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/commands"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "errorCode": 40101, "message": "Authorization required" })),
        )
        .mount(&server)
        .await;

    let err = client.commands().list().await.unwrap_err();
    match err {
        ObsidianError::UnexpectedStatus { status, payload } => {
            assert_eq!(status, 401);
            let payload = payload.expect("plugin error body should be decoded");
            assert_eq!(payload.error_code, 40101);
            assert_eq!(payload.message, "Authorization required");
        }
        other => panic!("expected unexpected status, got {other:?}"),
    }
}

#[tokio::test]
async fn execute_command_posts_to_its_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/commands/editor:toggle-bold"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.commands().execute("editor:toggle-bold").await.unwrap();
}

#[tokio::test]
async fn execute_unknown_command_names_the_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/commands/plugin:does-not-exist"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.commands().execute("plugin:does-not-exist").await.unwrap_err();
    assert_eq!(err, ObsidianError::not_found(ResourceKind::Command, "plugin:does-not-exist"));
    assert_eq!(err.to_string(), "command not found: plugin:does-not-exist");
}

#[tokio::test]
async fn execute_with_other_failure_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST")).respond_with(ResponseTemplate::new(500)).mount(&server).await;

    let err = client.commands().execute("editor:save-file").await.unwrap_err();
    assert_eq!(err, ObsidianError::unexpected_status(500));
}

#[tokio::test]
async fn execute_empty_id_is_rejected_locally() {
    let (server, client) = setup().await;

    Mock::given(method("POST")).respond_with(ResponseTemplate::new(204)).expect(0).mount(&server).await;

    let err = client.commands().execute("").await.unwrap_err();
    assert!(matches!(err, ObsidianError::InvalidInput(_)));
}
