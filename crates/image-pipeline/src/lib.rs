//! Client-side image transformation pipeline for AI headshot generation.
//!
//! Provides upload validation and decoding, square cropping, downscaling
//! (512px free-tier cap), tiled watermark overlay, and tier-based output
//! policy for the final download artifact.

pub mod artifact;
pub mod codec;
pub mod crop;
pub mod font;
pub mod resize;
pub mod tier;
pub mod watermark;

// Re-exports for convenience
pub use artifact::{DownloadArtifact, build_artifact};
pub use codec::{decode_image, encode_image, validate_upload};
pub use crop::{CropRegion, crop};
pub use resize::resize_to_fit;
pub use tier::{GenerationQuota, OutputFormat, Tier, TierPolicy};
pub use watermark::apply_watermark;

/// Unified error type for the image-pipeline crate.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid crop region: {0}")]
    InvalidRegion(String),

    #[error("Image decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Image encode failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
