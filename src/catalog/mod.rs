//! Fixed catalog of visual styles and their prompt templates.
//!
//! This table is the single source of truth for style names: request
//! validation, prompt compilation, and the option lists served to callers
//! (`GET /styles`, `forgectl styles`) all read from it.

use crate::error::{AppError, Result};

/// Token in a positive template that is replaced with the user's text.
pub const PLACEHOLDER: &str = "{}";

/// A pair of prompt templates guiding the model toward and away from the
/// visual characteristics of a style.
#[derive(Debug, Clone, Copy)]
pub struct StyleTemplate {
    /// Positive template, containing [`PLACEHOLDER`] exactly once.
    pub base: &'static str,
    /// Negative prompt, sent unchanged.
    pub negative: &'static str,
    /// Human-readable blurb for option lists.
    pub description: &'static str,
}

pub const STYLES: &[(&str, StyleTemplate)] = &[
    (
        "manga",
        StyleTemplate {
            base: "manga style, detailed ink lines, classic Japanese manga, {}, monochrome shading, panel layout",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, western style",
            description: "Classic Japanese manga style with clean lines and dramatic shading",
        },
    ),
    (
        "anime",
        StyleTemplate {
            base: "anime style, vibrant colors, cel shaded, {}, detailed lighting, clean lines",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, realistic, photographic",
            description: "Vibrant anime style with cel shading and clean lines",
        },
    ),
    (
        "cyberpunk",
        StyleTemplate {
            base: "cyberpunk style, neon lights, high tech, {}, rain-slicked streets, holographic displays",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, historical, natural, rural",
            description: "Futuristic cyberpunk aesthetic with neon and tech elements",
        },
    ),
    (
        "ancient",
        StyleTemplate {
            base: "ancient art style, weathered texture, historical accuracy, {}, aged parchment effect, traditional techniques, <lora:ancientArt_v1:0.7>",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, modern, futuristic, digital",
            description: "Traditional ancient art style with historical elements",
        },
    ),
    (
        "cardboard",
        StyleTemplate {
            base: "cardboard art style, craft material texture, DIY aesthetic, {}, visible corrugated patterns, handmade look, matte finish",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, realistic, smooth, glossy",
            description: "Creative cardboard art style with handcrafted feel",
        },
    ),
    (
        "Comic",
        StyleTemplate {
            base: "comic book art style, bold outlines, dynamic composition, {}, dramatic lighting, halftone dots, <lora:comicBook_v1:0.6>, saturated colors",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, realistic, manga style",
            description: "Creative Comic Style Designs",
        },
    ),
    (
        "Realism",
        StyleTemplate {
            base: "photorealistic, highly detailed, professional photography, {}, natural lighting, 8k uhd, detailed textures, hyperrealistic",
            negative: "ugly, deformed, noisy, blurry, low quality, pixelated, anime, cartoon, drawing",
            description: "A realistic style for visualizing scenes.",
        },
    ),
];

/// Look up the template for a style name. Total over the fixed key set.
pub fn lookup(style: &str) -> Option<&'static StyleTemplate> {
    STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, template)| template)
}

/// Iterate over all styles in catalog order.
pub fn styles() -> impl Iterator<Item = (&'static str, &'static StyleTemplate)> {
    STYLES.iter().map(|(name, template)| (*name, template))
}

/// Check the catalog invariants: every positive template carries the
/// insertion point exactly once, and negative templates never do.
pub fn validate() -> Result<()> {
    for (name, template) in STYLES {
        let occurrences = template.base.matches(PLACEHOLDER).count();
        if occurrences != 1 {
            return Err(AppError::Internal(format!(
                "style '{}' has {} insertion points in its positive template, expected 1",
                name, occurrences
            )));
        }
        if template.negative.contains(PLACEHOLDER) {
            return Err(AppError::Internal(format!(
                "style '{}' has an insertion point in its negative template",
                name
            )));
        }
    }
    Ok(())
}
