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
fn decodes_dimensions_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile.png");
    flat_image(64, 48).save(&path).unwrap();

    let decoded = decode_image(&path).unwrap();
    assert_eq!((decoded.width, decoded.height), (64, 48));
}

#[test]
fn missing_files_error_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = decode_image(&dir.path().join("nope.png")).unwrap_err();
    assert!(err.to_string().contains("nope.png"));
}

#[test]
fn downscale_caps_width_and_keeps_aspect() {
    let scaled = downscale_to_width(flat_image(2400, 1200), 1920);
    assert_eq!((scaled.width(), scaled.height()), (1920, 960));
}

#[test]
fn downscale_never_enlarges() {
    let same = downscale_to_width(flat_image(640, 480), 1920);
    assert_eq!((same.width(), same.height()), (640, 480));
    let exact = downscale_to_width(flat_image(1920, 400), 1920);
    assert_eq!(exact.width(), 1920);
}
