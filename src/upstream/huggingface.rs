//! HTTP client for the Hugging Face Inference API

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};
use crate::prompt::CompiledPrompt;

/// Diffusion step count sent with every request.
const NUM_INFERENCE_STEPS: u32 = 30;
/// Guidance (CFG) scale sent with every request.
const GUIDANCE_SCALE: f32 = 7.5;

/// Request body for the inference endpoint
#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    negative_prompt: &'a str,
    num_inference_steps: u32,
    guidance_scale: f32,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

/// Client for one fixed text-to-image model behind the inference API.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    model: String,
}

impl InferenceClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// The model identifier requests are routed to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one inference round trip and return the raw image bytes.
    ///
    /// The upstream signals out-of-band conditions (e.g. a model still
    /// loading) with a success status and a JSON body, so the declared
    /// content type decides how the body is read.
    pub async fn generate(&self, token: &str, prompt: &CompiledPrompt) -> Result<Vec<u8>> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let payload = InferencePayload {
            inputs: &prompt.positive,
            parameters: InferenceParameters {
                negative_prompt: &prompt.negative,
                num_inference_steps: NUM_INFERENCE_STEPS,
                guidance_scale: GUIDANCE_SCALE,
            },
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: true,
            },
        };

        debug!(url = %url, "Sending inference request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read upstream error body".to_string());
            return Err(AppError::Upstream(body));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("image") {
            let body: serde_json::Value = response
                .json()
                .await
                .map_err(|e| self.transport_error(&url, e))?;
            return Err(AppError::UnexpectedPayload(body.to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        info!(model = %self.model, bytes = bytes.len(), "Inference completed");
        Ok(bytes.to_vec())
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::UpstreamTimeout(url.to_string())
        } else {
            AppError::HttpClient(e)
        }
    }
}
