//! Application State
//!
//! Holds the configuration, the selected project backend and the widget
//! registry. Everything here is built once at startup and read-only
//! afterwards, so requests never contend on it.

use std::sync::Arc;

use tracing::info;

use super::backend::{MockBackend, ProjectBackend, UpstreamBackend};
use super::error::ProjectResult;
use crate::config::{BackendMode, Config};
use crate::mcp::widgets::WidgetRegistry;
use crate::view::render::render_widget_shell;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,

    /// Answers project-creation requests (mock or upstream).
    pub backend: Arc<dyn ProjectBackend>,

    /// Widgets exposed to the host runtime.
    pub widgets: WidgetRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), Arc::new(MockBackend))
    }
}

impl AppState {
    /// Creates state around an explicit backend.
    pub fn new(config: Config, backend: Arc<dyn ProjectBackend>) -> Self {
        let render_endpoint = format!("{}/render", config.public_base_url);
        let widgets = WidgetRegistry::new(render_widget_shell(&render_endpoint));

        Self {
            config,
            backend,
            widgets,
        }
    }

    /// Creates state with the backend selected by `config.backend`.
    pub fn from_config(config: Config) -> ProjectResult<Self> {
        let backend: Arc<dyn ProjectBackend> = match config.backend {
            BackendMode::Mock => {
                info!("using mock project backend");
                Arc::new(MockBackend)
            }
            BackendMode::Upstream => {
                let upstream = UpstreamBackend::new(&config)?;
                info!(endpoint = upstream.endpoint(), "using upstream project backend");
                Arc::new(upstream)
            }
        };

        Ok(Self::new(config, backend))
    }
}
