//! Project Creation Helpers
//!
//! Pure functions shared by the endpoint, the backends and the MCP tool.

use super::error::{ProjectError, ProjectResult};
use super::models::{CreateProjectInput, PreviewAsset, ProjectCreated};

pub const PROMPT_REQUIRED_MESSAGE: &str = "userPrompt is required";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create project";

const SAMPLE_PROJECT_ID: &str = "dd3d4dfc-2b2a-4f3a-9de0-2884e711da1c";
const SAMPLE_SHORT_ID: &str = "JiY8w0x0YmjU-489";
const SAMPLE_PROJECT_LINK: &str =
    "http://localhost:3000/advertising/campaign/editor/JiY8w0x0YmjU-489/AI-Generated-Project";
const SAMPLE_CREATIVE_URL: &str = "https://dev.rocketium.com/images/export/dd3d4dfc-2b2a-4f3a-9de0-2884e711da1c/1080x1080-10a0a439-c8ec-489a-914b-3b418717bee1-1763701008852.png";

/// Extracts the prompt, rejecting a missing or empty one.
///
/// Whitespace-only prompts are accepted as-is.
pub fn validate_prompt(input: &CreateProjectInput) -> ProjectResult<&str> {
    match input.user_prompt.as_deref() {
        Some(prompt) if !prompt.is_empty() => Ok(prompt),
        _ => Err(ProjectError::validation(PROMPT_REQUIRED_MESSAGE)),
    }
}

/// The fixed project returned by the mock backend.
pub fn sample_project() -> ProjectCreated {
    ProjectCreated {
        project_id: SAMPLE_PROJECT_ID.to_string(),
        short_id: SAMPLE_SHORT_ID.to_string(),
        project_link: SAMPLE_PROJECT_LINK.to_string(),
        preview_urls: vec![PreviewAsset {
            size_id: "1080x1080".to_string(),
            dimension: "1080x1080".to_string(),
            creative_url: SAMPLE_CREATIVE_URL.to_string(),
            thumbnail: SAMPLE_CREATIVE_URL.to_string(),
        }],
        message: "Project created successfully".to_string(),
    }
}

/// One-line summary shown to the user after a successful creation.
pub fn format_project_summary(project: &ProjectCreated) -> String {
    format!(
        "Project created successfully! Project ID: {}",
        project.project_id
    )
}

/// One-line summary shown to the user after a failed creation.
pub fn format_failure_summary(message: &str) -> String {
    format!("Error creating project: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_prompt_is_rejected() {
        for input in [
            CreateProjectInput::default(),
            CreateProjectInput::new(""),
        ] {
            let err = validate_prompt(&input).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), PROMPT_REQUIRED_MESSAGE);
        }
    }

    #[test]
    fn present_prompt_is_returned_unchanged() {
        let input = CreateProjectInput::new("  summer sale  ");
        assert_eq!(validate_prompt(&input).unwrap(), "  summer sale  ");
    }

    #[test]
    fn sample_project_has_a_single_preview() {
        let project = sample_project();
        assert_eq!(project.preview_urls.len(), 1);
        assert_eq!(project.preview_urls[0].dimension, "1080x1080");
        assert_eq!(
            format_project_summary(&project),
            "Project created successfully! Project ID: dd3d4dfc-2b2a-4f3a-9de0-2884e711da1c"
        );
    }
}
