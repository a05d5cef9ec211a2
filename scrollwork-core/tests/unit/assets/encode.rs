use super::*;
use image::{ImageBuffer, Rgba};

fn flat_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
        width,
        height,
        Rgba([40u8, 60, 40, 255]),
    ))
}

#[test]
fn produces_a_riff_webp_container() {
    let bytes = encode_webp(&flat_image(32, 32), 80.0);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WEBP");
}

#[test]
fn output_decodes_back_with_the_same_dimensions() {
    let bytes = encode_webp(&flat_image(48, 20), 80.0);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (48, 20));
}
