//! Environment-derived application configuration.
//!
//! `.env` is loaded by `main` before this runs; only overrides live here.
//! The Gemini credential itself is read by `GeminiClient::from_env`.

use std::path::PathBuf;

/// Runtime configuration from environment variables.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Custom watermark font file (`WATERMARK_FONT`), TTF/OTF.
    pub watermark_font: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let watermark_font = std::env::var("WATERMARK_FONT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self { watermark_font }
    }
}
