//! Data URI encoding for generated images

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{AppError, Result};

/// Encode raw image bytes as a PNG data URI, usable directly as an image
/// source by callers.
pub fn png_data_uri(data: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(data))
}

/// Decode an image data URI back into its format label and raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:image/")
        .ok_or_else(|| AppError::Internal(format!("Not an image data URI: {:.32}", uri)))?;

    let (format, encoded) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::Internal("Data URI is not base64 encoded".to_string()))?;

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::Internal(format!("Invalid base64 payload: {}", e)))?;

    Ok((format.to_string(), bytes))
}
