//! Subscription tier policy.
//!
//! Maps a tier to the transformation pipeline its output must go through.
//! The mapping is pure: identical input always yields identical output, and
//! nothing here touches UI or session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Free-tier resolution cap: long edge in pixels.
pub const FREE_MAX_PX: u32 = 512;

/// Free-tier generation allowance per session.
pub const FREE_MAX_GENERATIONS: u32 = 1;

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Pro => write!(f, "pro"),
        }
    }
}

impl FromStr for Tier {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "pro" => Ok(Tier::Pro),
            other => Err(PipelineError::InvalidInput(format!(
                "Unknown tier '{other}', expected 'free' or 'pro'"
            ))),
        }
    }
}

/// Output encoding for the download artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// The transformation pipeline a tier's output must go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPolicy {
    pub apply_resize: bool,
    pub max_px: Option<u32>,
    pub apply_watermark: bool,
    pub output_format: OutputFormat,
    pub filename_suffix: &'static str,
}

impl TierPolicy {
    /// Decide the pipeline for a tier.
    ///
    /// Free previews are downscaled to [`FREE_MAX_PX`], watermarked, and
    /// encoded as JPEG; pro output is untouched lossless PNG.
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => Self {
                apply_resize: true,
                max_px: Some(FREE_MAX_PX),
                apply_watermark: true,
                output_format: OutputFormat::Jpeg,
                filename_suffix: "-preview",
            },
            Tier::Pro => Self {
                apply_resize: false,
                max_px: None,
                apply_watermark: false,
                output_format: OutputFormat::Png,
                filename_suffix: "",
            },
        }
    }
}

/// Per-session generation counter for the free tier.
///
/// Pro is never limited; free passes [`FREE_MAX_GENERATIONS`] times and
/// then refuses until a new session starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationQuota {
    used: u32,
}

impl GenerationQuota {
    /// Generations left for this session, `None` meaning unlimited.
    pub fn remaining(&self, tier: Tier) -> Option<u32> {
        match tier {
            Tier::Free => Some(FREE_MAX_GENERATIONS.saturating_sub(self.used)),
            Tier::Pro => None,
        }
    }

    /// Consume one generation. Returns false if the allowance is exhausted.
    pub fn try_consume(&mut self, tier: Tier) -> bool {
        match tier {
            Tier::Free => {
                if self.used >= FREE_MAX_GENERATIONS {
                    return false;
                }
                self.used += 1;
                true
            }
            Tier::Pro => true,
        }
    }
}
