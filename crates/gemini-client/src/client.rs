//! Async HTTP client for Gemini image edits.

use crate::models::{GenerateContentRequest, GenerateContentResponse, extract_image};
use crate::{DEFAULT_MODEL, EditRequest, EditedImage, GeminiError};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from `GEMINI_API_KEY` and optional `GEMINI_MODEL`.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeminiError::MissingCredential)?;
        let mut client = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                client.model = model;
            }
        }
        Ok(client)
    }

    /// Override the image model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submit an image edit: source image plus instruction in, edited image out.
    ///
    /// One request per call; no retry. A transport or non-success status
    /// failure is [`GeminiError::Api`]/[`GeminiError::Http`], a response
    /// without an image part is [`GeminiError::NoImageReturned`].
    pub async fn edit_image(&self, request: &EditRequest) -> Result<EditedImage, GeminiError> {
        let payload = GenerateContentRequest::for_edit(
            &request.image,
            &request.mime_type,
            &request.instruction,
        );
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);

        tracing::info!(
            model = %self.model,
            image_bytes = request.image.len(),
            "Submitting image edit"
        );

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_image(parsed)
    }
}
