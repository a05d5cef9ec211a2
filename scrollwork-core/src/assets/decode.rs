use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, imageops::FilterType};

use crate::foundation::error::ScrollworkResult;

/// Decoded raster image plus its pixel dimensions.
#[derive(Debug)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: DynamicImage,
}

/// Decode a raster image from disk.
pub fn decode_image(path: &Path) -> ScrollworkResult<DecodedImage> {
    let image =
        image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    let (width, height) = (image.width(), image.height());
    Ok(DecodedImage {
        width,
        height,
        image,
    })
}

/// Downscale to `max_width` if the image is wider, preserving aspect ratio.
/// Images at or under the limit pass through untouched; nothing is enlarged.
pub fn downscale_to_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    if max_width == 0 || image.width() <= max_width {
        return image;
    }
    let scale = f64::from(max_width) / f64::from(image.width());
    let height = ((f64::from(image.height()) * scale).round() as u32).max(1);
    image.resize_exact(max_width, height, FilterType::Lanczos3)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
