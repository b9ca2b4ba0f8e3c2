//! REST API handler for project creation
//!
//! `POST /api/create-project` validates the prompt, asks the configured
//! backend for a project and reports failures as structured error bodies.

use super::{error::ProjectError, helpers::*, models::*, state::*};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info, warn};

/// Creates routes for project-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/create-project", post(create_project))
}

/// Endpoint: POST /api/create-project
///
/// The body is decoded as JSON whatever its `Content-Type`; browsers send
/// string bodies as `text/plain`.
async fn create_project(State(state): State<SharedState>, body: Bytes) -> Response {
    let input = match serde_json::from_slice::<CreateProjectInput>(&body) {
        Ok(input) => input,
        Err(e) => {
            error!(reason = %e, "unreadable create-project body");
            return ProjectCreationResult::Failed {
                error: ProjectError::MalformedBody(format!("Invalid request body: {}", e)),
                user_prompt: None,
            }
            .into_response();
        }
    };

    create_project_from_prompt(&state, input)
        .await
        .into_response()
}

/// Runs one project-creation request in-process.
///
/// Shared by the HTTP endpoint and the `create_project` tool. Never panics
/// and never returns a transport error: every outcome is a
/// [`ProjectCreationResult`].
pub async fn create_project_from_prompt(
    state: &AppState,
    input: CreateProjectInput,
) -> ProjectCreationResult {
    let outcome = match validate_prompt(&input) {
        Ok(prompt) => state.backend.create_project(prompt).await,
        Err(error) => Err(error),
    };

    match outcome {
        Ok(project) => {
            info!(project_id = %project.project_id, "project created");
            ProjectCreationResult::Created(project)
        }
        Err(error) => {
            if error.is_validation() {
                warn!("create-project rejected: {}", error);
            } else {
                error!("project creation failed: {}", error);
            }
            ProjectCreationResult::Failed {
                error,
                user_prompt: input.user_prompt,
            }
        }
    }
}

impl ProjectCreationResult {
    /// Status code and JSON body reported for this outcome.
    pub fn into_parts(self) -> (StatusCode, serde_json::Value) {
        match self {
            ProjectCreationResult::Created(project) => (
                StatusCode::OK,
                serde_json::to_value(CreateProjectResponse::from(project))
                    .unwrap_or_default(),
            ),
            ProjectCreationResult::Failed { error, user_prompt } => (
                error.status_code(),
                serde_json::to_value(ErrorResponse {
                    error: true,
                    message: error.to_string(),
                    user_prompt,
                })
                .unwrap_or_default(),
            ),
        }
    }
}

impl IntoResponse for ProjectCreationResult {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        (status, Json(body)).into_response()
    }
}
