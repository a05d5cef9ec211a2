use crate::foundation::core::ScrollOffset;
use crate::foundation::error::{ScrollworkError, ScrollworkResult};
use crate::parallax::map::ScrollMap;

/// One decorative background layer driven by scroll position.
///
/// Each layer declares its own domain and range, so layers drift at different
/// rates (and in different directions) to produce the depth illusion. The
/// constants are visual tuning values carried as page configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    /// Stable layer identifier, unique within a page.
    pub id: String,
    /// Vertical translation mapping in pixels.
    pub translate_y: ScrollMap,
    /// Optional rotation mapping in degrees.
    #[serde(default)]
    pub rotate_deg: Option<ScrollMap>,
}

impl ParallaxLayer {
    /// Check id and mapping invariants.
    pub fn validate(&self) -> ScrollworkResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollworkError::validation("layer id must be non-empty"));
        }
        self.translate_y.validate()?;
        if let Some(rotate) = &self.rotate_deg {
            rotate.validate()?;
        }
        Ok(())
    }

    /// Derived offset pair for the current scroll position.
    ///
    /// Purely derived; recomputing at the same offset yields the same value.
    pub fn sample(&self, offset: ScrollOffset) -> LayerOffset {
        LayerOffset {
            translate_y: self.translate_y.sample(offset),
            rotate_deg: self
                .rotate_deg
                .map(|map| map.sample(offset))
                .unwrap_or_default(),
        }
    }
}

/// Derived `(translateY, rotateDeg)` pair for one layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerOffset {
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}
