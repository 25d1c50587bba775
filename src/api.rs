//! HTTP client for the reel ideas backend

use crate::constants::*;
use crate::types::{ErrorBody, GenerateRequest, Idea, SaveIdeaRequest, SaveOutcome};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures surfaced to the user. `Display` is the message shown in the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Could not reach the backend: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from the backend: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e)
        }
    }
}

/// The backend operations the UI depends on
#[async_trait]
pub trait IdeaBackend: Send + Sync {
    async fn generate_ideas(&self, niche: &str) -> Result<Vec<Idea>, ApiError>;
    async fn save_idea(&self, request: &SaveIdeaRequest) -> Result<SaveOutcome, ApiError>;
    async fn saved_ideas(&self) -> Result<Vec<Idea>, ApiError>;
    async fn delete_idea(&self, id: &str) -> Result<(), ApiError>;
    async fn health(&self) -> Result<(), ApiError>;
}

/// `IdeaBackend` over plain HTTP/JSON
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("not a base URL".into()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("reel-planner/{}", APP_VERSION))
            .build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "not a base URL".into(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Pass successful responses through; otherwise build the user-facing error.
/// With `prefer_detail` the backend's `detail` string replaces `fallback` when present.
async fn ensure_success(
    response: Response,
    fallback: &str,
    prefer_detail: bool,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = if prefer_detail {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message().map(str::to_string))
    } else {
        None
    };

    warn!(status = %status, detail = ?detail, "Backend returned an error status");
    Err(ApiError::Status {
        status: status.as_u16(),
        message: detail.unwrap_or_else(|| fallback.to_string()),
    })
}

#[async_trait]
impl IdeaBackend for HttpBackend {
    async fn generate_ideas(&self, niche: &str) -> Result<Vec<Idea>, ApiError> {
        let url = self.endpoint(GENERATE_PATH)?;
        debug!(%url, niche, "Requesting generated ideas");
        let response = self
            .client
            .post(url)
            .json(&GenerateRequest { niche })
            .send()
            .await?;
        let response = ensure_success(response, MSG_GENERATE_FAILED, false).await?;
        Ok(response.json().await?)
    }

    async fn save_idea(&self, request: &SaveIdeaRequest) -> Result<SaveOutcome, ApiError> {
        let url = self.endpoint(SAVE_PATH)?;
        debug!(%url, niche = %request.niche, "Saving idea");
        let response = self.client.post(url).json(request).send().await?;
        let response = ensure_success(response, MSG_SAVE_FAILED, false).await?;
        Ok(response.json().await?)
    }

    async fn saved_ideas(&self) -> Result<Vec<Idea>, ApiError> {
        let url = self.endpoint(SAVED_LIST_PATH)?;
        debug!(%url, "Fetching saved ideas");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, MSG_SAVED_LIST_FAILED, false).await?;
        Ok(response.json().await?)
    }

    async fn delete_idea(&self, id: &str) -> Result<(), ApiError> {
        let mut segments = DELETE_PATH.to_vec();
        segments.push(id);
        let url = self.endpoint(&segments)?;
        debug!(%url, id, "Deleting idea");
        let response = self.client.delete(url).send().await?;
        ensure_success(response, MSG_DELETE_FAILED, true).await?;
        Ok(())
    }

    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.client.get(url).send().await?;
        ensure_success(response, "Backend is unhealthy", false).await?;
        Ok(())
    }
}
