//! Tiled watermark overlay for free-tier previews.
//!
//! The watermark text is repeated on a rotated grid and alpha-composited
//! over the image. Tiles are laid out on a transparent square layer spanning
//! the image diagonal, so rotating the layer leaves no untiled corners.

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use tracing::debug;

/// Text stamped across free-tier previews.
pub const WATERMARK_TEXT: &str = "ProHeadshot AI";

/// Watermark font size as a fraction of the short edge.
const FONT_RATIO: f32 = 0.06;

/// Legibility floor for the watermark font size, in pixels.
const MIN_FONT_SIZE: f32 = 16.0;

/// Gap between tile origins, as a multiple of the font size.
const TILE_GAP_FACTOR: f32 = 4.0;

/// Rotation of the tile grid (-30 degrees).
const TILE_ANGLE: f32 = -std::f32::consts::PI / 6.0;

/// Watermark fill: white at ~0.35 opacity.
const FILL: Rgba<u8> = Rgba([255, 255, 255, 90]);

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Overlay `text` in a repeating rotated pattern across the image.
///
/// The output has identical dimensions to the input; the source pixels are
/// drawn unchanged underneath the semi-transparent text tiles.
pub fn apply_watermark<F: Font>(source: &DynamicImage, text: &str, font: &F) -> DynamicImage {
    let (w, h) = (source.width(), source.height());
    let font_size = (w.min(h) as f32 * FONT_RATIO).round().max(MIN_FONT_SIZE);
    let scale = PxScale::from(font_size);
    let gap = (font_size * TILE_GAP_FACTOR).round() as i32;

    debug!(w, h, font_size, "Applying watermark");

    // Tile onto a transparent layer covering the full diagonal extent.
    let diag = ((w as f32).hypot(h as f32)).ceil() as u32;
    let mut layer = RgbaImage::from_pixel(diag.max(1), diag.max(1), Rgba([0, 0, 0, 0]));

    let text_width = measure_text_width(font, scale, text) as i32;
    let mut ty = 0i32;
    while ty < diag as i32 {
        let mut tx = 0i32;
        while tx < diag as i32 {
            // Horizontally center the text at each tile origin.
            draw_text_mut(&mut layer, FILL, tx - text_width / 2, ty, scale, font, text);
            tx += gap;
        }
        ty += gap;
    }

    let rotated = rotate_about_center(&layer, TILE_ANGLE, Interpolation::Bilinear, Rgba([0, 0, 0, 0]));

    // Composite the centered window of the rotated layer over the source.
    let off_x = (rotated.width() - w) / 2;
    let off_y = (rotated.height() - h) / 2;
    let mut out = source.to_rgba8();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let overlay = rotated.get_pixel(x + off_x, y + off_y);
        let alpha = f32::from(overlay[3]) / 255.0;
        if alpha > 0.01 {
            *pixel = blend_pixel(pixel, overlay, alpha);
        }
    }

    DynamicImage::ImageRgba8(out)
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (f32::from(fg[0]) * alpha + f32::from(bg[0]) * inv) as u8,
        (f32::from(fg[1]) * alpha + f32::from(bg[1]) * inv) as u8,
        (f32::from(fg[2]) * alpha + f32::from(bg[2]) * inv) as u8,
        bg[3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font;

    fn gray_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([128, 128, 128, 255]),
        ))
    }

    #[test]
    fn watermark_preserves_dimensions() {
        let font = font::default_font();
        for (w, h) in [(400, 400), (512, 288), (97, 311)] {
            let out = apply_watermark(&gray_image(w, h), WATERMARK_TEXT, &font);
            assert_eq!(out.width(), w);
            assert_eq!(out.height(), h);
        }
    }

    #[test]
    fn watermark_modifies_pixels() {
        let font = font::default_font();
        let src = gray_image(300, 200);
        let out = apply_watermark(&src, WATERMARK_TEXT, &font).to_rgba8();
        let src = src.to_rgba8();

        let changed = out
            .enumerate_pixels()
            .filter(|(x, y, px)| src.get_pixel(*x, *y) != *px)
            .count();
        assert!(changed > 0, "watermark should stamp visible pixels");
    }

    #[test]
    fn watermark_lightens_but_never_replaces() {
        // At 0.35 opacity over a mid-gray base, stamped pixels must stay
        // strictly below pure white.
        let font = font::default_font();
        let out = apply_watermark(&gray_image(300, 200), WATERMARK_TEXT, &font).to_rgba8();
        assert!(out.pixels().all(|p| p[0] < 255));
    }

    #[test]
    fn watermark_handles_tiny_images() {
        let font = font::default_font();
        let out = apply_watermark(&gray_image(8, 8), WATERMARK_TEXT, &font);
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 8);
    }

    #[test]
    fn measure_text_width_is_positive_for_non_empty_text() {
        let font = font::default_font();
        let width = measure_text_width(&font, PxScale::from(32.0), "ProHeadshot AI");
        assert!(width > 0);
    }

    #[test]
    fn measure_text_width_grows_with_scale() {
        let font = font::default_font();
        let small = measure_text_width(&font, PxScale::from(16.0), "watermark");
        let large = measure_text_width(&font, PxScale::from(64.0), "watermark");
        assert!(large > small);
    }
}
