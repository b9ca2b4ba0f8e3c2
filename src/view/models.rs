//! View selection
//!
//! Host-supplied widget props arrive in one of two shapes: the tool output
//! itself, or wrapped as `result.structuredContent`. [`WidgetView::from_props`]
//! folds both into one discriminated type before anything is rendered.

use serde_json::Value;

use crate::project::models::PreviewAsset;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Data needed to render the project viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    pub project_id: String,
    pub short_id: Option<String>,
    pub project_link: String,
    pub preview_urls: Vec<PreviewAsset>,
}

impl ProjectView {
    /// The asset shown in the viewer: the first one with a usable URL.
    pub fn primary_preview(&self) -> Option<&PreviewAsset> {
        self.preview_urls.first().filter(|a| a.display_url().is_some())
    }
}

/// Exactly one of the three widget screens.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    Project(ProjectView),
    Error {
        message: String,
    },
    Landing {
        /// Name returned by the `show_content` tool, if any.
        name: Option<String>,
        /// False when rendered outside a host (no props at all).
        host_detected: bool,
    },
}

impl WidgetView {
    /// Normalizes host props into a view.
    ///
    /// `None` means no host context is available.
    pub fn from_props(props: Option<&Value>) -> Self {
        let Some(props) = props else {
            return WidgetView::Landing {
                name: None,
                host_detected: false,
            };
        };

        let payload = props
            .pointer("/result/structuredContent")
            .filter(|v| v.is_object())
            .unwrap_or(props);

        if payload.get("error").and_then(Value::as_bool) == Some(true) {
            let message = non_empty_str(payload, "message")
                .unwrap_or(UNKNOWN_ERROR_MESSAGE)
                .to_string();
            return WidgetView::Error { message };
        }

        if let Some(project_id) = non_empty_str(payload, "projectId") {
            let preview_urls = payload
                .get("previewUrls")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();

            return WidgetView::Project(ProjectView {
                project_id: project_id.to_string(),
                short_id: non_empty_str(payload, "shortId").map(str::to_string),
                project_link: non_empty_str(payload, "projectLink")
                    .unwrap_or_default()
                    .to_string(),
                preview_urls,
            });
        }

        let name = non_empty_str(payload, "name")
            .or_else(|| non_empty_str(props, "name"))
            .map(str::to_string);

        WidgetView::Landing {
            name,
            host_detected: true,
        }
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
