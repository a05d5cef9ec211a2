//! One-shot batch conversion of raster assets to WebP.

pub mod batch;
