//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the project
//! widget server. It exports `handle_tool_call` publicly to make it accessible
//! for tests.

use super::{helpers::*, models::*};
use crate::project::helpers::{format_failure_summary, format_project_summary};
use crate::project::{create_project_from_prompt, models::*, state::*};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(reason = %e.body_text(), "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    debug!(method = method_name, id = %id, "MCP call");

    // Dispatch Method
    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list(&state)),
        "resources/list" => rpc_success(id, handle_resources_list(&state)),
        "resources/read" => {
            let uri = params.get("uri").and_then(|u| u.as_str()).unwrap_or("");
            match handle_resources_read(&state, uri) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg),
            }
        }
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg), // Invalid params or unknown tool
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown MCP method");
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list(state: &AppState) -> Value {
    let content = state.widgets.content();
    let project = state.widgets.project();

    json!({
        "tools": [
            {
                "name": content.id,
                "title": content.title,
                "description": "Fetch and display the homepage content with the name of the user",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "The name of the user to display on the homepage"
                        }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(content)
            },
            {
                "name": project.id,
                "title": project.title,
                "description": "Create a new image project from a user prompt. Takes a descriptive prompt about the desired project (theme, products, text, effects, CTAs) and generates a complete project using AI.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "userPrompt": {
                            "type": "string",
                            "description": "A descriptive prompt for creating the project. Include details about the theme, products, text content, effects, and call-to-action elements you want in the project."
                        }
                    },
                    "required": ["userPrompt"],
                    "additionalProperties": false
                },
                "_meta": widget_meta(project)
            }
        ]
    })
}

/// Handles `resources/list` request.
fn handle_resources_list(state: &AppState) -> Value {
    let resources: Vec<Value> = state
        .widgets
        .all()
        .into_iter()
        .map(|widget| {
            json!({
                "name": widget.resource_name,
                "uri": widget.template_uri,
                "title": widget.title,
                "description": widget.description,
                "mimeType": WIDGET_MIME_TYPE,
                "_meta": resource_meta(widget, false)
            })
        })
        .collect();

    json!({ "resources": resources })
}

/// Handles `resources/read` request.
fn handle_resources_read(state: &AppState, uri: &str) -> Result<Value, String> {
    let widget = state
        .widgets
        .by_uri(uri)
        .ok_or_else(|| format!("Unknown resource: {}", uri))?;

    Ok(json!({
        "contents": [{
            "uri": widget.template_uri,
            "mimeType": WIDGET_MIME_TYPE,
            "text": format!("<html>{}</html>", widget.html),
            "_meta": resource_meta(widget, true)
        }]
    }))
}

/// Handles `tools/call` request (Business Logic).
///
/// `Err` is reserved for protocol misuse (unknown tool, bad `show_content`
/// arguments). `create_project` always answers `Ok`.
pub async fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    let widget = state
        .widgets
        .by_tool(name)
        .ok_or_else(|| format!("Unknown tool: {}", name))?;

    let result = match widget.id {
        SHOW_CONTENT_TOOL => handle_show_content_tool(widget, args)?,
        CREATE_PROJECT_TOOL => handle_create_project_tool(state, widget, args).await,
        _ => return Err(format!("Unknown tool: {}", name)),
    };

    serde_json::to_value(result).map_err(|e| format!("Failed to encode tool result: {}", e))
}

/// Handles the show_content tool functionality
fn handle_show_content_tool(widget: &ContentWidget, args: Value) -> Result<ToolResult, String> {
    let input: ShowContentInput =
        serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))?;

    Ok(ToolResult {
        content: vec![TextContent::new(input.name.clone())],
        structured_content: json!({
            "name": input.name,
            "timestamp": iso_timestamp()
        }),
        meta: widget_meta(widget),
    })
}

/// Handles the create_project tool functionality
///
/// Arguments that do not deserialize are treated as a missing prompt, so the
/// failure lands in the payload like any other.
async fn handle_create_project_tool(
    state: &AppState,
    widget: &ContentWidget,
    args: Value,
) -> ToolResult {
    let input: CreateProjectInput = serde_json::from_value(args).unwrap_or_default();
    let meta = widget_meta(widget);

    match create_project_from_prompt(state, input).await {
        ProjectCreationResult::Created(project) => {
            info!(project_id = %project.project_id, "create_project tool succeeded");
            ToolResult {
                content: vec![TextContent::new(format_project_summary(&project))],
                structured_content: json!({
                    "projectId": project.project_id,
                    "shortId": project.short_id,
                    "projectLink": project.project_link,
                    "previewUrls": project.preview_urls,
                    "timestamp": iso_timestamp()
                }),
                meta,
            }
        }
        ProjectCreationResult::Failed { error, user_prompt } => {
            let message = error.to_string();
            let mut structured = json!({
                "error": true,
                "message": message,
            });
            if let Some(prompt) = user_prompt {
                structured["userPrompt"] = Value::String(prompt);
            }

            ToolResult {
                content: vec![TextContent::new(format_failure_summary(&message))],
                structured_content: structured,
                meta,
            }
        }
    }
}
