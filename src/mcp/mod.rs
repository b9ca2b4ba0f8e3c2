//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, tool results, constants)
//! - RPC helpers (success/error responses, widget metadata)
//! - The widget registry (resources and the tools that render them)
//! - MCP handlers (initialize, tools/list, tools/call, etc.)

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod widgets;

// Re-export commonly used types and functions
pub use handlers::{handle_tool_call, routes};
pub use widgets::WidgetRegistry;
