//! Upstream inference provider clients

pub mod huggingface;

pub use huggingface::InferenceClient;
