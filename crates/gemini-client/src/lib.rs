//! Gemini image edit client library.
//!
//! A thin adapter over the Gemini `generateContent` REST endpoint: sends a
//! source image plus a text instruction, returns the edited image bytes.
//! Retry and backoff are the remote service's concern, not this crate's.

pub mod client;
pub mod models;

pub use client::GeminiClient;

/// Image model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Input to an edit call: encoded image bytes plus the edit instruction.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub image: Vec<u8>,
    pub mime_type: String,
    pub instruction: String,
}

/// Successful edit output: encoded image bytes as returned by the model.
#[derive(Debug, Clone)]
pub struct EditedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Unified error type for the gemini-client crate.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("API key is missing. Please check your environment configuration.")]
    MissingCredential,

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("No image data found in the model response{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    NoImageReturned { detail: Option<String> },
}
