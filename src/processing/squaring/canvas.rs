//! Placement of a decoded image onto the target canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;
use crate::core::{BackgroundColor, TargetSize};
use super::strategy::SquaringStrategy;

/// Squares `image` onto a `target` canvas.
///
/// Horizontal and vertical sources are scaled to fit and centered on a canvas
/// filled with `background`; square sources are resized directly. The result
/// is always exactly `target.width x target.height`.
pub fn square_image(
    image: &DynamicImage,
    target: TargetSize,
    background: BackgroundColor,
) -> (RgbImage, SquaringStrategy) {
    let (src_w, src_h) = (image.width(), image.height());
    let strategy = SquaringStrategy::classify(src_w, src_h, target);
    let (scaled_w, scaled_h) = strategy.scaled_dimensions(src_w, src_h, target);

    let flattened = flatten_onto(image, background);
    let scaled = resize_to(&flattened, scaled_w, scaled_h);

    if strategy == SquaringStrategy::Square {
        return (scaled, strategy);
    }

    let (x, y) = centered_offset((scaled_w, scaled_h), target);
    let mut canvas = RgbImage::from_pixel(target.width, target.height, background.to_rgb());
    imageops::replace(&mut canvas, &scaled, x as i64, y as i64);

    debug!(
        "Placed {}x{} at ({}, {}) on {} canvas ({} strategy)",
        scaled_w, scaled_h, x, y, target, strategy
    );

    (canvas, strategy)
}

/// Top-left offset that centers a `scaled` image on the canvas.
///
/// When the free space is odd the extra pixel goes to the bottom/right band.
pub fn centered_offset(scaled: (u32, u32), target: TargetSize) -> (u32, u32) {
    (
        target.width.saturating_sub(scaled.0) / 2,
        target.height.saturating_sub(scaled.1) / 2,
    )
}

/// Converts to RGB, compositing any alpha channel over `background`.
pub fn flatten_onto(image: &DynamicImage, background: BackgroundColor) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let bg = [background.r, background.g, background.b];
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let px = rgba.get_pixel(x, y).0;
        let alpha = px[3] as u32;
        let blend = |fg: u8, back: u8| -> u8 {
            ((fg as u32 * alpha + back as u32 * (255 - alpha) + 127) / 255) as u8
        };
        Rgb([blend(px[0], bg[0]), blend(px[1], bg[1]), blend(px[2], bg[2])])
    })
}

fn resize_to(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Lanczos3)
}
