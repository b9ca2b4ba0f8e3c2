//! Project-creation backends
//!
//! [`MockBackend`] answers with a fixed project. [`UpstreamBackend`] forwards
//! the prompt to the project-generation service with server-held credentials
//! and a hard timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use super::error::{ProjectError, ProjectResult};
use super::helpers::{sample_project, DEFAULT_FAILURE_MESSAGE};
use super::models::{ProjectCreated, UpstreamRequest, UpstreamResponse};
use crate::config::{Config, Credentials};

/// Path of the upstream endpoint, relative to `API_BASE_URL`.
pub const UPSTREAM_ENDPOINT: &str = "/api/v3/aiProjectCreator/createFromPrompt";

#[async_trait]
pub trait ProjectBackend: Send + Sync {
    /// Creates a project from an already validated prompt.
    async fn create_project(&self, user_prompt: &str) -> ProjectResult<ProjectCreated>;
}

// =============================================================================
// Mock
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct MockBackend;

#[async_trait]
impl ProjectBackend for MockBackend {
    async fn create_project(&self, user_prompt: &str) -> ProjectResult<ProjectCreated> {
        debug!(prompt_len = user_prompt.len(), "mock backend answering");
        Ok(sample_project())
    }
}

// =============================================================================
// Upstream
// =============================================================================

pub struct UpstreamBackend {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    config: Config,
}

impl UpstreamBackend {
    pub fn new(config: &Config) -> ProjectResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(ProjectError::Transport)?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.api_base_url, UPSTREAM_ENDPOINT),
            timeout: config.upstream_timeout,
            config: config.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> ProjectError {
        if err.is_timeout() {
            ProjectError::Timeout {
                after: self.timeout,
            }
        } else {
            ProjectError::Transport(err)
        }
    }
}

#[async_trait]
impl ProjectBackend for UpstreamBackend {
    async fn create_project(&self, user_prompt: &str) -> ProjectResult<ProjectCreated> {
        let credentials = Credentials::from_config(&self.config)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(CONTENT_TYPE, "application/json")
            .header("sessionid", &credentials.session_id)
            .header("userid", &credentials.user_id)
            .json(&UpstreamRequest {
                user_prompt,
                team_id: &credentials.team_id,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "upstream returned an error status");
            return Err(ProjectError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let payload: UpstreamResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.map_send_error(e)
            } else {
                ProjectError::MalformedBody(format!("Invalid upstream response: {}", e))
            }
        })?;

        match payload.data {
            Some(data) if payload.success => Ok(ProjectCreated {
                project_id: data.project_id,
                short_id: data.short_id,
                project_link: data.project_link,
                preview_urls: data.preview_urls,
                message: payload.message,
            }),
            _ => {
                let message = if payload.message.is_empty() {
                    DEFAULT_FAILURE_MESSAGE.to_string()
                } else {
                    payload.message
                };
                Err(ProjectError::Rejected(message))
            }
        }
    }
}
