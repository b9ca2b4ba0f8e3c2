//! Shared helpers for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use project_widget_rust::config::Config;
use project_widget_rust::project::models::ProjectCreated;
use project_widget_rust::project::{AppState, ProjectBackend, ProjectError, ProjectResult};
use project_widget_rust::router::create_app_router;

/// Backend that always rejects with a fixed message.
pub struct RejectingBackend(pub String);

#[async_trait]
impl ProjectBackend for RejectingBackend {
    async fn create_project(&self, _user_prompt: &str) -> ProjectResult<ProjectCreated> {
        Err(ProjectError::Rejected(self.0.clone()))
    }
}

/// Test app backed by the mock backend
pub fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::default()))
}

/// Test app backed by an arbitrary backend
pub fn create_test_app_with(backend: Arc<dyn ProjectBackend>) -> axum::Router {
    create_app_router(Arc::new(AppState::new(Config::default(), backend)))
}

/// Sends a raw request and returns status and body text
pub async fn send_raw(app: &axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Sends a JSON request and returns status and parsed body (REST API)
pub async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let (status, text) = send_raw(app, request).await;
    (status, serde_json::from_str(&text).unwrap_or(json!({})))
}

/// Sends a JSON-RPC request to /mcp
pub async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    send_rest_request(app, "POST", "/mcp", request_body).await
}

/// Calls a tool and returns the JSON-RPC response body
pub async fn call_tool(app: &axum::Router, name: &str, arguments: Value) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), 99).await;
    assert_eq!(status, StatusCode::OK);
    body
}
