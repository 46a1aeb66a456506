//! Axum request handlers for the HTTP API

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::env;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::types::{GenerateRequest, GenerateResponse, StyleInfo};
use crate::error::{AppError, Result};
use crate::{catalog, prompt, response, AppState};

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Style option list, sourced from the same catalog the generate handler
/// validates against.
pub async fn styles() -> Json<Vec<StyleInfo>> {
    let styles = catalog::styles()
        .map(|(name, template)| StyleInfo {
            name: name.to_string(),
            description: template.description.to_string(),
        })
        .collect();

    Json(styles)
}

/// Generate an image from a style name and a scene description.
///
/// Validation order: missing field, unknown style, absent upstream token.
/// The token is read from the environment on every request; all downstream
/// faults are normalized into the result envelope by [`AppError`].
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let request_id = Uuid::new_v4();

    if request.style.is_empty() || request.prompt.is_empty() {
        return Err(AppError::MissingField);
    }

    if catalog::lookup(&request.style).is_none() {
        return Err(AppError::InvalidStyle(request.style));
    }

    let token_env = &state.settings.upstream.token_env;
    let token = env::var(token_env)
        .ok()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::MissingToken(token_env.clone()))?;

    let compiled = prompt::compile(&request.style, &request.prompt)?;

    info!(
        %request_id,
        style = %request.style,
        model = %state.upstream.model(),
        "Dispatching generation request"
    );

    let image = state.upstream.generate(&token, &compiled).await?;

    info!(%request_id, bytes = image.len(), "Generation succeeded");

    Ok(Json(GenerateResponse::success(
        response::png_data_uri(&image),
        compiled.positive,
    )))
}

/// Keep the JSON envelope shape on 405s instead of axum's empty reply.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(GenerateResponse::failure("Method Not Allowed")),
    )
}
