//! Project Creation Domain Module
//!
//! This module contains the project-creation endpoint and everything it
//! needs, including:
//! - Domain models (request, preview assets, results, upstream wire shapes)
//! - Errors and their HTTP status mapping
//! - Backends (fixed mock response or the upstream service)
//! - Application state management
//! - REST API handlers

pub mod backend;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use backend::{MockBackend, ProjectBackend, UpstreamBackend};
pub use error::{ProjectError, ProjectResult};
pub use handlers::{create_project_from_prompt, routes};
pub use state::{AppState, SharedState};
