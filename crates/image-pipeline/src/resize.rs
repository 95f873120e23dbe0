//! Aspect-ratio-preserving downscale for free-tier output.
//!
//! Uses Lanczos3 filtering for high-quality downsampling. Never upscales:
//! an image already at or under the cap is returned unchanged.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Downscale an image so its longest edge is at most `max_px` pixels.
///
/// Returns the image unchanged if `max(width, height) ≤ max_px`. Otherwise
/// both dimensions are scaled uniformly, rounded, and kept at least 1.
pub fn resize_to_fit(img: &DynamicImage, max_px: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let long_edge = orig_w.max(orig_h);

    if long_edge <= max_px {
        debug!(orig_w, orig_h, max_px, "Image within cap, skipping resize");
        return img.clone();
    }

    let scale = f64::from(max_px) / f64::from(long_edge);
    let new_w = ((f64::from(orig_w) * scale).round() as u32).max(1);
    let new_h = ((f64::from(orig_h) * scale).round() as u32).max(1);

    debug!(orig_w, orig_h, new_w, new_h, "Downscaling image");
    img.resize_exact(new_w, new_h, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let gray = GrayImage::from_pixel(width, height, Luma([128]));
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn resize_downscales_portrait_to_cap() {
        let img = create_test_image(2000, 3000);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.height(), 512);
        // 2000 * (512/3000) = 341.33 -> 341
        assert_eq!(result.width(), 341);
    }

    #[test]
    fn resize_downscales_landscape_to_cap() {
        let img = create_test_image(1920, 1080);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.width(), 512);
        // 1080 * (512/1920) = 288
        assert_eq!(result.height(), 288);
    }

    #[test]
    fn resize_is_noop_under_cap() {
        let img = create_test_image(400, 400);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.width(), 400);
        assert_eq!(result.height(), 400);
    }

    #[test]
    fn resize_is_noop_at_cap() {
        let img = create_test_image(512, 300);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.width(), 512);
        assert_eq!(result.height(), 300);
    }

    #[test]
    fn resize_noop_preserves_pixel_content() {
        let mut gray = GrayImage::from_pixel(100, 80, Luma([128]));
        gray.put_pixel(3, 7, Luma([42]));
        let img = DynamicImage::ImageLuma8(gray);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.to_luma8().get_pixel(3, 7), &Luma([42]));
    }

    #[test]
    fn resize_preserves_aspect_ratio_within_rounding() {
        let img = create_test_image(1333, 999);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.width().max(result.height()), 512);

        let original = f64::from(1333) / f64::from(999);
        let resized = f64::from(result.width()) / f64::from(result.height());
        assert!((original - resized).abs() / original < 0.01);
    }

    #[test]
    fn resize_preserves_non_zero_dimensions() {
        // Extreme aspect ratio must not collapse the short edge to zero.
        let img = create_test_image(10000, 3);
        let result = resize_to_fit(&img, 512);
        assert_eq!(result.width(), 512);
        assert!(result.height() >= 1);
    }
}
