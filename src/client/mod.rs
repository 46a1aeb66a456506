//! Caller-side client: typed access to `/generate` plus the retry policy.
//!
//! The retry loop runs on the caller, wrapping the gateway's black-box
//! request/response contract. Attempts are strictly sequential with a fixed
//! delay between failures; rejected requests (4xx) are surfaced immediately
//! instead of burning the retry window.

use chrono::Utc;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::api::types::{GenerateRequest, GenerateResponse};
use crate::response;

/// Errors surfaced to the caller of the generation client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The gateway rejected the request (4xx). Retrying cannot help.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The gateway or its upstream failed (5xx). Worth retrying.
    #[error("{message}")]
    Failed { status: u16, message: String },

    /// Transport-level fault before a response envelope was read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered outside its envelope contract.
    #[error("Malformed gateway response: {0}")]
    Protocol(String),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Failed { .. } | ClientError::Transport(_))
    }
}

/// Bounded fixed-delay retry policy
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Run `attempt` up to `policy.max_attempts` times, sleeping `policy.delay`
/// after each retryable failure. The first success returns immediately; the
/// final failure is returned verbatim. Non-retryable failures short-circuit.
pub async fn retry<F, Fut, T>(policy: RetryPolicy, mut attempt: F) -> Result<T, ClientError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempts = 1;
    loop {
        match attempt(attempts).await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempts < policy.max_attempts => {
                warn!(
                    attempt = attempts,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    "Generation attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempts += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// A successfully generated image
#[derive(Debug, Clone)]
pub struct Generated {
    /// Base64 data URI, usable directly as an image source
    pub image: String,
    /// Compiled positive prompt as the gateway sent it upstream
    pub prompt: String,
}

/// Typed client for the gateway's `/generate` operation
#[derive(Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    base_url: String,
    policy: RetryPolicy,
}

impl GenerateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// One generation attempt against the gateway.
    pub async fn generate(&self, style: &str, prompt: &str) -> Result<Generated, ClientError> {
        let request = GenerateRequest {
            style: style.to_string(),
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(e.to_string()))?;

        if !status.is_success() {
            let message = envelope
                .error
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(if status.is_client_error() {
                ClientError::Rejected {
                    status: status.as_u16(),
                    message,
                }
            } else {
                ClientError::Failed {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        match envelope.image {
            Some(image) => Ok(Generated {
                image,
                prompt: envelope.prompt.unwrap_or_default(),
            }),
            None => Err(ClientError::Protocol(
                "Success envelope without image payload".to_string(),
            )),
        }
    }

    /// Generate with the configured retry policy applied.
    pub async fn generate_with_retry(
        &self,
        style: &str,
        prompt: &str,
    ) -> Result<Generated, ClientError> {
        retry(self.policy, |_attempt| self.generate(style, prompt)).await
    }
}

/// Write a generated data URI to `dir` under a filename embedding the style
/// and a millisecond timestamp, returning the path.
pub fn save_data_uri(uri: &str, style: &str, dir: &Path) -> Result<PathBuf, ClientError> {
    let (format, bytes) =
        response::decode_data_uri(uri).map_err(|e| ClientError::Protocol(e.to_string()))?;

    let filename = format!("generated-{}-{}.{}", style, Utc::now().timestamp_millis(), format);
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
