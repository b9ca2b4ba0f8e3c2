//! Project creation errors
//!
//! The `Display` text of each variant is the `message` a caller sees in the
//! error payload, so upstream rejections are carried verbatim.

use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ProjectError {
    /// Required input missing (400).
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Upstream request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("Upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("API request failed: {status} {reason} - {body}")]
    UpstreamStatus {
        status: u16,
        reason: String,
        body: String,
    },

    /// Upstream answered 2xx but reported failure or omitted the project.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    MalformedBody(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

impl ProjectError {
    pub fn validation(message: impl Into<String>) -> Self {
        ProjectError::Validation(message.into())
    }

    /// HTTP status used when this error is reported by the endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProjectError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ProjectError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_maps_to_bad_request() {
        assert_eq!(
            ProjectError::validation("userPrompt is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProjectError::Timeout {
                after: Duration::from_secs(100)
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProjectError::Config(ConfigError::MissingCredentials).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_messages_are_carried_verbatim() {
        let err = ProjectError::Rejected("Prompt too vague".to_string());
        assert_eq!(err.to_string(), "Prompt too vague");

        let err = ProjectError::UpstreamStatus {
            status: 502,
            reason: "Bad Gateway".to_string(),
            body: "upstream down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed: 502 Bad Gateway - upstream down"
        );
    }
}
