//! View route handlers
//!
//! `GET /` renders the standalone page (no host context). `POST /render`
//! renders the screen for an explicit props payload; the widget shell calls
//! it with the host's tool output.

use super::render::{render_page, render_view};
use super::models::WidgetView;
use crate::project::state::SharedState;
use axum::{response::Html, routing::{get, post}, Json, Router};
use serde_json::Value;
use tracing::debug;

/// Creates routes for the view
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/render", post(render))
}

/// Endpoint: GET /
async fn index() -> Html<String> {
    Html(render_page(None))
}

/// Endpoint: POST /render
async fn render(Json(props): Json<Value>) -> Html<String> {
    let view = WidgetView::from_props(Some(&props));
    debug!(?view, "rendering widget view");
    Html(render_view(&view))
}
