//! Project Creation Domain Models
//!
//! Request/response shapes for the project-creation endpoint and the wire
//! format of the upstream project-generation service.

use serde::{Deserialize, Serialize};

use super::error::ProjectError;

// =============================================================================
// Endpoint Models
// =============================================================================

/// Body of `POST /api/create-project`.
///
/// `user_prompt` stays optional so a missing field reaches validation
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    #[serde(default)]
    pub user_prompt: Option<String>,
}

impl CreateProjectInput {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: Some(user_prompt.into()),
        }
    }
}

/// One rendered output of a generated project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAsset {
    pub size_id: String,
    pub dimension: String,
    pub creative_url: String,
    pub thumbnail: String,
}

impl PreviewAsset {
    /// URL to display: the creative itself, else its thumbnail.
    pub fn display_url(&self) -> Option<&str> {
        [self.creative_url.as_str(), self.thumbnail.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
    }
}

/// A successfully created project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreated {
    pub project_id: String,
    pub short_id: String,
    pub project_link: String,
    pub preview_urls: Vec<PreviewAsset>,
    pub message: String,
}

/// Success body returned by the endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    pub success: bool,
    pub message: String,
    pub project_id: String,
    pub short_id: String,
    pub project_link: String,
    pub preview_urls: Vec<PreviewAsset>,
}

impl From<ProjectCreated> for CreateProjectResponse {
    fn from(project: ProjectCreated) -> Self {
        Self {
            success: true,
            message: project.message,
            project_id: project.project_id,
            short_id: project.short_id,
            project_link: project.project_link,
            preview_urls: project.preview_urls,
        }
    }
}

/// Error body returned by the endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
}

/// Outcome of one project-creation request. Exactly one variant per request.
#[derive(Debug)]
pub enum ProjectCreationResult {
    Created(ProjectCreated),
    Failed {
        error: ProjectError,
        /// Prompt as received, echoed back to the caller.
        user_prompt: Option<String>,
    },
}

// =============================================================================
// Upstream Wire Models
// =============================================================================

/// Body sent to the upstream service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRequest<'a> {
    pub user_prompt: &'a str,
    pub team_id: &'a str,
}

/// Envelope returned by the upstream service.
#[derive(Debug, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<UpstreamProjectData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamProjectData {
    pub project_id: String,
    pub short_id: String,
    pub project_link: String,
    #[serde(default)]
    pub preview_urls: Vec<PreviewAsset>,
}
