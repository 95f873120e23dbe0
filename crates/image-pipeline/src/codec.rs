//! Upload validation, decoding, and artifact encoding.
//!
//! Uploads are checked against the accepted formats and size cap before any
//! pipeline stage runs. Encoding produces either lossless PNG (pro output)
//! or quality-95 JPEG (cropped submissions and free-tier previews).

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::PipelineError;
use crate::tier::OutputFormat;

/// Maximum accepted upload size in bytes (5MB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// JPEG quality used for crop submissions and free-tier previews.
pub const JPEG_QUALITY: u8 = 95;

/// Validate uploaded bytes and return their MIME type.
///
/// Accepts PNG, JPEG, and WEBP up to [`MAX_UPLOAD_BYTES`]. The format is
/// sniffed from the payload itself, not trusted from a filename.
pub fn validate_upload(bytes: &[u8]) -> Result<&'static str, PipelineError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(PipelineError::InvalidInput(format!(
            "File size too large ({} bytes). Please try an image under 5MB.",
            bytes.len()
        )));
    }

    let format = image::guess_format(bytes).map_err(|_| {
        PipelineError::InvalidInput(
            "Unrecognized image data. Please upload a valid image file (JPG, PNG, WEBP)."
                .to_string(),
        )
    })?;

    match format {
        ImageFormat::Png => Ok("image/png"),
        ImageFormat::Jpeg => Ok("image/jpeg"),
        ImageFormat::WebP => Ok("image/webp"),
        other => Err(PipelineError::InvalidInput(format!(
            "Unsupported image format {other:?}. Please upload JPG, PNG, or WEBP."
        ))),
    }
}

/// Decode image bytes into a raster.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, PipelineError> {
    let img = image::load_from_memory(bytes).map_err(PipelineError::Decode)?;
    debug!(
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    Ok(img)
}

/// Encode a raster in the given output format.
pub fn encode_image(img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, PipelineError> {
    let mut bytes = Vec::new();
    match format {
        OutputFormat::Png => {
            img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(PipelineError::Encode)?;
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel, so flatten to RGB first.
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), JPEG_QUALITY);
            rgb.write_with_encoder(encoder).map_err(PipelineError::Encode)?;
        }
    }
    debug!(
        format = ?format,
        size = bytes.len(),
        "Encoded image"
    );
    Ok(bytes)
}
