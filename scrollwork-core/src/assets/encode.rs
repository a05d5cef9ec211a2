use image::DynamicImage;

/// Encode an image as lossy WebP at the given quality factor (0-100).
///
/// The `image` crate only writes lossless WebP, so encoding goes through the
/// `webp` bindings; input pixels are normalized to straight RGBA8 first.
pub fn encode_webp(image: &DynamicImage, quality: f32) -> Vec<u8> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
    encoder.encode(quality).to_vec()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
