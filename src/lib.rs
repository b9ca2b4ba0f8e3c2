//! Project Widget Library
//!
//! This library provides a ChatGPT app widget server: a project-creation
//! endpoint, an MCP (Model Context Protocol) surface exposing widget
//! resources and tools, and the server-rendered widget view.

pub mod config;

// Domain modules
pub mod mcp;
pub mod project;
pub mod view;

// Infrastructure
pub mod router;
