//! Raster image decoding and WebP encoding for the build-time pipeline.

pub mod decode;
pub mod encode;
