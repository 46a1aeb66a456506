//! Wire types shared by the HTTP surface and the caller-side client

use serde::{Deserialize, Serialize};

/// Inbound generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub prompt: String,
}

/// Uniform result envelope for `/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Generated image as a base64 data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Compiled positive prompt, returned for display and audit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn success(image: String, prompt: String) -> Self {
        Self {
            success: true,
            image: Some(image),
            prompt: Some(prompt),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            prompt: None,
            error: Some(error.into()),
        }
    }
}

/// One entry of the style option list served to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleInfo {
    pub name: String,
    pub description: String,
}
