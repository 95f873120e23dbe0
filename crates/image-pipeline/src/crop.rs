//! Square crop engine.
//!
//! A crop region is always square and fully contained in the source image.
//! Regions come either from explicit pixel coordinates or from the
//! normalized view parameters the interactive cropper produces (center
//! point in `[0,1]²` plus a zoom factor).

use image::DynamicImage;
use tracing::debug;

use crate::PipelineError;

/// A square crop region in source-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Build a region from normalized view parameters.
    ///
    /// The visible square side is `min(src_w, src_h) / zoom`; the region is
    /// centered on `(center_x · src_w, center_y · src_h)` and clamped so it
    /// stays inside the source bounds.
    pub fn from_view(
        src_w: u32,
        src_h: u32,
        center_x: f64,
        center_y: f64,
        zoom: f64,
    ) -> Result<Self, PipelineError> {
        if src_w == 0 || src_h == 0 {
            return Err(PipelineError::InvalidInput(
                "Source image has zero dimensions".to_string(),
            ));
        }
        if !zoom.is_finite() || zoom < 1.0 {
            return Err(PipelineError::InvalidInput(format!(
                "Zoom must be at least 1.0, got {zoom}"
            )));
        }
        for (name, value) in [("center_x", center_x), ("center_y", center_y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PipelineError::InvalidInput(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let short_edge = src_w.min(src_h);
        let side = ((f64::from(short_edge) / zoom).floor() as u32).clamp(1, short_edge);

        let half = f64::from(side) / 2.0;
        let max_x = src_w - side;
        let max_y = src_h - side;
        let x = ((center_x * f64::from(src_w) - half).round().max(0.0) as u32).min(max_x);
        let y = ((center_y * f64::from(src_h) - half).round().max(0.0) as u32).min(max_y);

        debug!(x, y, side, zoom, "Computed crop region from view");
        Ok(Self {
            x,
            y,
            width: side,
            height: side,
        })
    }

    /// Check the square and in-bounds invariants against a source size.
    fn validate(&self, src_w: u32, src_h: u32) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidRegion(
                "Region has zero dimensions".to_string(),
            ));
        }
        if self.width != self.height {
            return Err(PipelineError::InvalidRegion(format!(
                "Region must be square, got {}x{}",
                self.width, self.height
            )));
        }
        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= src_w);
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= src_h);
        if !fits_x || !fits_y {
            return Err(PipelineError::InvalidRegion(format!(
                "Region {}x{} at ({}, {}) exceeds source bounds {src_w}x{src_h}",
                self.width, self.height, self.x, self.y
            )));
        }
        Ok(())
    }
}

/// Copy exactly the pixels within `region` into a new raster.
///
/// The output is `region.width × region.height`, 1:1 with the source crop.
pub fn crop(source: &DynamicImage, region: CropRegion) -> Result<DynamicImage, PipelineError> {
    region.validate(source.width(), source.height())?;
    debug!(
        x = region.x,
        y = region.y,
        side = region.width,
        "Cropping image"
    );
    Ok(source.crop_imm(region.x, region.y, region.width, region.height))
}
