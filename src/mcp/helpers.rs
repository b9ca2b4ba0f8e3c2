//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use super::models::ContentWidget;

/// Constructs the tool metadata required by the OpenAI widget system.
///
/// The widget is rendered from the tool result only; it may not call tools
/// itself.
pub fn widget_meta(widget: &ContentWidget) -> Value {
    json!({
        "openai/outputTemplate": widget.template_uri,
        "openai/toolInvocation/invoking": widget.invoking,
        "openai/toolInvocation/invoked": widget.invoked,
        "openai/widgetAccessible": false,
        "openai/resultCanProduceWidget": true,
    })
}

/// Constructs the presentation metadata attached to a widget resource.
///
/// # Arguments
///
/// * `with_domain` - Include `openai/widgetDomain` (set on resource contents,
///   not on the listing).
pub fn resource_meta(widget: &ContentWidget, with_domain: bool) -> Value {
    let mut meta = json!({
        "openai/widgetDescription": widget.description,
        "openai/widgetPrefersBorder": widget.prefers_border,
    });

    if with_domain {
        meta["openai/widgetDomain"] = json!(widget.widget_domain);
    }

    meta
}

/// Current time as RFC 3339 UTC with millisecond precision.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
