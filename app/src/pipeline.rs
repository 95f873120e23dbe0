//! Pipeline orchestrator.
//!
//! Sequences crop, model submission, tier post-processing, and artifact
//! encoding. Every invocation is independent: a failure at any stage is
//! terminal for that run and nothing is retried automatically.

use std::fmt;

use ab_glyph::Font;
use gemini_client::{EditRequest, GeminiClient, GeminiError};
use image_pipeline::tier::OutputFormat;
use image_pipeline::watermark::WATERMARK_TEXT;
use image_pipeline::{
    CropRegion, DownloadArtifact, PipelineError, Tier, TierPolicy, apply_watermark,
    build_artifact, codec, crop, resize_to_fit,
};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cropping,
    Submitting,
    PostProcessing,
    Encoding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cropping => write!(f, "cropping"),
            Stage::Submitting => write!(f, "submitting"),
            Stage::PostProcessing => write!(f, "post-processing"),
            Stage::Encoding => write!(f, "encoding"),
        }
    }
}

/// Errors terminating an edit run.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Remote(#[from] GeminiError),

    #[error("You've used your free preview. Upgrade to Pro for unlimited generations.")]
    QuotaExhausted,
}

/// Normalized crop parameters from the interactive view.
#[derive(Debug, Clone, Copy)]
pub struct CropView {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

/// Run one full edit: upload bytes in, download artifact out.
///
/// `view = None` submits the source uncropped. The instruction is checked
/// before anything else so an empty one never reaches the network.
pub async fn run_edit(
    client: &GeminiClient,
    font: &impl Font,
    source_bytes: &[u8],
    view: Option<CropView>,
    instruction: &str,
    tier: Tier,
) -> Result<DownloadArtifact, EditError> {
    if instruction.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "Please describe the edit you want to make.".to_string(),
        )
        .into());
    }

    let mime = codec::validate_upload(source_bytes)?;
    let source = codec::decode_image(source_bytes)?;
    let policy = TierPolicy::for_tier(tier);

    let (submit_bytes, submit_mime) = match view {
        Some(v) => {
            tracing::info!(stage = %Stage::Cropping, zoom = v.zoom, "Cropping source");
            let region = CropRegion::from_view(
                source.width(),
                source.height(),
                v.center_x,
                v.center_y,
                v.zoom,
            )?;
            let cropped = crop(&source, region)?;
            (codec::encode_image(&cropped, OutputFormat::Jpeg)?, "image/jpeg")
        }
        None => (source_bytes.to_vec(), mime),
    };

    tracing::info!(stage = %Stage::Submitting, tier = %tier, "Submitting edit");
    let edited = client
        .edit_image(&EditRequest {
            image: submit_bytes,
            mime_type: submit_mime.to_string(),
            instruction: instruction.to_string(),
        })
        .await?;

    tracing::info!(stage = %Stage::PostProcessing, mime = %edited.mime_type, "Processing model output");
    let mut img = codec::decode_image(&edited.bytes)?;
    if policy.apply_resize {
        if let Some(max_px) = policy.max_px {
            img = resize_to_fit(&img, max_px);
        }
    }
    if policy.apply_watermark {
        img = apply_watermark(&img, WATERMARK_TEXT, font);
    }

    tracing::info!(stage = %Stage::Encoding, "Encoding artifact");
    let artifact = build_artifact(&img, &policy)?;
    Ok(artifact)
}
