//! Scroll-to-offset mappings for the decorative background layers.

pub mod layer;
pub mod map;
