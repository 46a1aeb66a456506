//! Common error types for the generation gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::GenerateResponse;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Missing style or prompt")]
    MissingField,

    #[error("Invalid style selected: {0}")]
    InvalidStyle(String),

    #[error("Server misconfiguration: missing API token ({0} is not set)")]
    MissingToken(String),

    #[error("Upstream inference error: {0}")]
    Upstream(String),

    #[error("Unexpected upstream response: {0}")]
    UnexpectedPayload(String),

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingField => StatusCode::BAD_REQUEST,
            AppError::InvalidStyle(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnexpectedPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamTimeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(GenerateResponse::failure(self.to_string()));

        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
