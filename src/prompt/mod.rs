//! Prompt compilation: style template + user text -> final prompt pair.

use crate::catalog;
use crate::error::{AppError, Result};

/// The two prompt strings sent upstream. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt {
    pub positive: String,
    pub negative: String,
}

/// Compile a style and a scene description into the final prompt pair.
///
/// The user's text replaces the first insertion point of the positive
/// template verbatim. No trimming, escaping, or truncation is applied.
pub fn compile(style: &str, text: &str) -> Result<CompiledPrompt> {
    let template =
        catalog::lookup(style).ok_or_else(|| AppError::InvalidStyle(style.to_string()))?;

    Ok(CompiledPrompt {
        positive: template.base.replacen(catalog::PLACEHOLDER, text, 1),
        negative: template.negative.to_string(),
    })
}
