use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shared::protocol::{ErrorBody, FormSubmission, SubmitAck, FORM_ROUTE};
use tracing::{info, warn};
use url::Url;

use crate::{config::ClientConfig, error::SubmitError};

#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, submission: &FormSubmission) -> Result<SubmitAck, SubmitError>;
}

pub struct MissingFormSubmitter;

#[async_trait]
impl FormSubmitter for MissingFormSubmitter {
    async fn submit(&self, _submission: &FormSubmission) -> Result<SubmitAck, SubmitError> {
        Err(SubmitError::Unavailable)
    }
}

pub struct HttpFormSubmitter {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpFormSubmitter {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut base = Url::parse(&config.server_url)
            .with_context(|| format!("invalid server url '{}'", config.server_url))?;
        // Keep any mount prefix: join relative to a base path ending in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(FORM_ROUTE.trim_start_matches('/'))
            .with_context(|| format!("failed to build form endpoint from '{base}'"))?;
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            http,
            endpoint,
            timeout: config.request_timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport(&self, err: reqwest::Error) -> SubmitError {
        if err.is_timeout() {
            SubmitError::Timeout(self.timeout)
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<SubmitAck, SubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if status.is_success() {
            let ack: SubmitAck = response.json().await.map_err(|err| {
                if err.is_timeout() {
                    SubmitError::Timeout(self.timeout)
                } else {
                    SubmitError::Decode(err.to_string())
                }
            })?;
            info!(endpoint = %self.endpoint, status = status.as_u16(), "form submission accepted");
            return Ok(ack);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        warn!(endpoint = %self.endpoint, status = status.as_u16(), %message, "form submission rejected");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Timeout,
    Transport,
    Rejected,
    Protocol,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureNotice {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&SubmitError> for FailureNotice {
    fn from(err: &SubmitError) -> Self {
        let (kind, message) = match err {
            SubmitError::Timeout(_) => (
                FailureKind::Timeout,
                "The server took too long to respond. Your answers are saved; please submit again."
                    .to_string(),
            ),
            SubmitError::Transport(_) => (
                FailureKind::Transport,
                "Could not reach the server; check your connection and submit again.".to_string(),
            ),
            SubmitError::Rejected { status, message } => (
                FailureKind::Rejected,
                format!("Submission was rejected ({status}): {message}. Review the form and submit again."),
            ),
            SubmitError::Decode(_) => (
                FailureKind::Protocol,
                "The server sent an unexpected response; please submit again.".to_string(),
            ),
            SubmitError::Unavailable => (
                FailureKind::Unavailable,
                "Submissions are currently unavailable.".to_string(),
            ),
        };
        Self { kind, message }
    }
}
