//! Watermark font loading.
//!
//! Ships DejaVu Sans Bold as the default watermark face; callers may load a
//! custom TTF/OTF from disk instead.

use std::path::Path;

use ab_glyph::{FontRef, FontVec};

use crate::PipelineError;

const VALID_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// The bundled default watermark font (DejaVu Sans Bold).
pub static DEFAULT_FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Parse the bundled default font.
pub fn default_font() -> FontRef<'static> {
    FontRef::try_from_slice(DEFAULT_FONT_BYTES).expect("bundled font is valid")
}

/// Resolve the watermark font: a custom file when configured, the bundled
/// default otherwise.
pub fn resolve_font(custom: Option<&Path>) -> Result<FontVec, PipelineError> {
    match custom {
        Some(path) => load_font(path),
        None => FontVec::try_from_vec(DEFAULT_FONT_BYTES.to_vec())
            .map_err(|_| PipelineError::InvalidInput("Bundled font failed to parse".to_string())),
    }
}

/// Load a custom watermark font from disk.
///
/// Only TTF/OTF files are accepted, matching what the renderer can parse.
pub fn load_font(path: &Path) -> Result<FontVec, PipelineError> {
    let valid_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| VALID_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    if !valid_ext {
        return Err(PipelineError::InvalidInput(format!(
            "Invalid font format for {} (only TTF/OTF supported)",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    FontVec::try_from_vec(bytes).map_err(|_| {
        PipelineError::InvalidInput(format!("Could not parse font file {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_parses() {
        // Would panic on a corrupt asset.
        let _ = default_font();
    }

    #[test]
    fn load_font_rejects_wrong_extension() {
        let err = load_font(Path::new("/tmp/nope.woff2")).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn load_font_propagates_missing_file() {
        let err = load_font(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn resolve_font_falls_back_to_bundled() {
        assert!(resolve_font(None).is_ok());
    }
}
