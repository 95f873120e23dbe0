//! Wire models for the Gemini `generateContent` endpoint.
//!
//! Requests serialize camelCase; responses are accepted in either camelCase
//! or snake_case spelling.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::{EditedImage, GeminiError};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single request/response part: inline image data or text.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(
        default,
        alias = "inline_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_data: Option<InlineData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    /// Request parts: source image first, then the edit instruction.
    pub fn for_edit(image: &[u8], mime_type: &str, instruction: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(instruction.to_string()),
                    },
                ],
            }],
        }
    }
}

/// Extract the edited image from a response.
///
/// The first inline-image part of the first candidate wins. If no image
/// part exists, a text part becomes the failure explanation.
pub fn extract_image(response: GenerateContentResponse) -> Result<EditedImage, GeminiError> {
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    if let Some(inline) = parts.iter().find_map(|p| p.inline_data.as_ref()) {
        let bytes = BASE64.decode(&inline.data)?;
        let mime_type = if inline.mime_type.is_empty() {
            "image/png".to_string()
        } else {
            inline.mime_type.clone()
        };
        return Ok(EditedImage { bytes, mime_type });
    }

    let detail = parts.into_iter().find_map(|p| p.text);
    Err(GeminiError::NoImageReturned { detail })
}
