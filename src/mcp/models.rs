//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) and the widgets exposed over it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the tool that echoes the user's name into the content widget
pub const SHOW_CONTENT_TOOL: &str = "show_content";
/// Name of the tool that creates a project from a prompt
pub const CREATE_PROJECT_TOOL: &str = "create_project";
/// URI for the content widget template
pub const CONTENT_TEMPLATE_URI: &str = "ui://widget/content-template.html";
/// URI for the project widget template
pub const PROJECT_TEMPLATE_URI: &str = "ui://widget/project-template.html";
/// MIME type for widgets
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "project-widget-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

/// A single `{ "type": "text", "text": ... }` content block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Result of a `tools/call`: text for the model, structured data for the widget.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<TextContent>,
    #[serde(rename = "structuredContent")]
    pub structured_content: Value,
    #[serde(rename = "_meta")]
    pub meta: Value,
}

// =============================================================================
// Widget Models
// =============================================================================

/// Static description of one widget: its resource and the tool that renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentWidget {
    /// Tool name.
    pub id: &'static str,
    /// Resource registration name.
    pub resource_name: &'static str,
    pub title: &'static str,
    pub template_uri: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
    pub html: String,
    pub description: &'static str,
    pub widget_domain: &'static str,
    pub prefers_border: bool,
}

/// Input for the show_content tool
#[derive(Debug, Deserialize)]
pub struct ShowContentInput {
    /// Name of the user to display
    pub name: String,
}
