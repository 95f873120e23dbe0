//! Download artifact assembly.

use chrono::Utc;
use image::DynamicImage;
use tracing::debug;

use crate::PipelineError;
use crate::codec;
use crate::tier::TierPolicy;

/// Final output of a pipeline run, handed to the save/download mechanism.
#[derive(Debug, Clone)]
pub struct DownloadArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub suggested_filename: String,
}

/// Encode the finished image per policy and name the artifact.
pub fn build_artifact(
    img: &DynamicImage,
    policy: &TierPolicy,
) -> Result<DownloadArtifact, PipelineError> {
    let bytes = codec::encode_image(img, policy.output_format)?;
    let suggested_filename = suggested_filename(policy, Utc::now().timestamp_millis());
    debug!(
        filename = %suggested_filename,
        size = bytes.len(),
        "Built download artifact"
    );
    Ok(DownloadArtifact {
        bytes,
        mime_type: policy.output_format.mime_type(),
        suggested_filename,
    })
}

/// Filename pattern: `pro-headshot-<timestamp><suffix>.<ext>`.
fn suggested_filename(policy: &TierPolicy, timestamp_millis: i64) -> String {
    format!(
        "pro-headshot-{}{}.{}",
        timestamp_millis,
        policy.filename_suffix,
        policy.output_format.extension()
    )
}
