//! Widget View Module
//!
//! Renders one of three screens (project viewer, error panel, landing page)
//! from the tool output the host injects:
//! - Props normalization into a single discriminated view type
//! - Pan/zoom state for the image viewer
//! - HTML rendering and the widget shell
//! - View route handlers

pub mod handlers;
pub mod models;
pub mod render;
pub mod viewer;

pub use handlers::routes;
pub use models::WidgetView;
pub use viewer::PanZoom;
