//! Integration tests for the upstream project backend using a wiremock server

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use project_widget_rust::config::{BackendMode, Config};
use project_widget_rust::project::backend::UPSTREAM_ENDPOINT;
use project_widget_rust::project::{AppState, ProjectBackend, ProjectError, UpstreamBackend};
use project_widget_rust::router::create_app_router;

use common::*;

fn upstream_config(server: &MockServer) -> Config {
    Config {
        backend: BackendMode::Upstream,
        api_base_url: server.uri(),
        session_id: Some("session-1".to_string()),
        user_id: Some("user-1".to_string()),
        team_id: Some("team-1".to_string()),
        ..Config::default()
    }
}

fn upstream_project() -> serde_json::Value {
    json!({
        "projectId": "p-42",
        "shortId": "short-42",
        "projectLink": "https://app.example.com/editor/short-42",
        "previewUrls": [{
            "sizeId": "1080x1920",
            "dimension": "1080x1920",
            "creativeUrl": "https://cdn.example.com/p-42.png",
            "thumbnail": "https://cdn.example.com/p-42-thumb.png"
        }]
    })
}

#[tokio::test]
async fn test_upstream_success_forwards_prompt_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .and(header("sessionid", "session-1"))
        .and(header("userid", "user-1"))
        .and(body_json(json!({ "userPrompt": "summer sale", "teamId": "team-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Created",
            "data": upstream_project()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = UpstreamBackend::new(&upstream_config(&server)).unwrap();
    let project = backend.create_project("summer sale").await.unwrap();

    assert_eq!(project.project_id, "p-42");
    assert_eq!(project.short_id, "short-42");
    assert_eq!(project.message, "Created");
    assert_eq!(project.preview_urls.len(), 1);
    assert_eq!(project.preview_urls[0].dimension, "1080x1920");
}

#[tokio::test]
async fn test_upstream_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let backend = UpstreamBackend::new(&upstream_config(&server)).unwrap();
    let err = backend.create_project("summer sale").await.unwrap_err();

    assert!(matches!(err, ProjectError::UpstreamStatus { status: 503, .. }));
    assert_eq!(
        err.to_string(),
        "API request failed: 503 Service Unavailable - maintenance"
    );
}

#[tokio::test]
async fn test_upstream_unsuccessful_payload_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Prompt rejected by moderation",
            "data": upstream_project()
        })))
        .mount(&server)
        .await;

    let backend = UpstreamBackend::new(&upstream_config(&server)).unwrap();
    let err = backend.create_project("summer sale").await.unwrap_err();

    assert!(matches!(err, ProjectError::Rejected(_)));
    assert_eq!(err.to_string(), "Prompt rejected by moderation");
}

#[tokio::test]
async fn test_upstream_missing_data_uses_default_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let backend = UpstreamBackend::new(&upstream_config(&server)).unwrap();
    let err = backend.create_project("summer sale").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to create project");
}

#[tokio::test]
async fn test_upstream_timeout_aborts_the_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "", "data": upstream_project() }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = Config {
        upstream_timeout: Duration::from_millis(200),
        ..upstream_config(&server)
    };
    let backend = UpstreamBackend::new(&config).unwrap();
    let err = backend.create_project("summer sale").await.unwrap_err();

    assert!(matches!(err, ProjectError::Timeout { .. }));
    assert_eq!(err.to_string(), "Upstream request timed out after 200ms");
}

#[tokio::test]
async fn test_endpoint_with_upstream_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Created upstream",
            "data": upstream_project()
        })))
        .mount(&server)
        .await;

    let state = AppState::from_config(upstream_config(&server)).unwrap();
    let app = create_app_router(Arc::new(state));

    let (status, body) = send_rest_request(
        &app,
        "POST",
        "/api/create-project",
        json!({ "userPrompt": "summer sale" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Created upstream");
    assert_eq!(body["projectId"], "p-42");
}

#[tokio::test]
async fn test_tool_with_upstream_failure_encodes_error_in_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UPSTREAM_ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let state = AppState::from_config(upstream_config(&server)).unwrap();
    let app = create_app_router(Arc::new(state));

    let body = call_tool(&app, "create_project", json!({ "userPrompt": "summer sale" })).await;

    assert!(body.get("error").is_none());
    let structured = &body["result"]["structuredContent"];
    assert_eq!(structured["error"], true);
    assert_eq!(
        structured["message"],
        "API request failed: 500 Internal Server Error - boom"
    );
    assert_eq!(structured["userPrompt"], "summer sale");
}

#[tokio::test]
async fn test_endpoint_without_credentials_is_server_error() {
    let server = MockServer::start().await;

    let config = Config {
        team_id: None,
        ..upstream_config(&server)
    };
    let app = create_app_router(Arc::new(AppState::from_config(config).unwrap()));

    let (status, body) = send_rest_request(
        &app,
        "POST",
        "/api/create-project",
        json!({ "userPrompt": "summer sale" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "Missing required environment variables (SESSION_ID, USER_ID, or TEAM_ID)"
    );
    assert_eq!(body["userPrompt"], "summer sale");
}
