//! Styled text-to-image generation gateway.
//!
//! Expands a free-text scene description and a named visual style into a
//! model-ready prompt pair, forwards it to a remote diffusion inference
//! service, and returns the generated image as a base64 data URI.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod response;
pub mod upstream;

pub use error::{AppError, Result};

use crate::config::Settings;
use crate::upstream::InferenceClient;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Settings,
    pub upstream: InferenceClient,
}
