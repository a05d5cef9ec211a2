use crate::foundation::core::{ScrollOffset, ScrollRange};
use crate::foundation::error::{ScrollworkError, ScrollworkResult};

/// Clamped linear mapping from a scroll-position domain to an output range.
///
/// For input `x` over domain `[d0, d1]` and range `(r0, r1)`:
/// `t = clamp((x - d0) / (d1 - d0), 0, 1)` and `output = r0 + t * (r1 - r0)`.
/// Inputs outside the domain clamp to the nearest range endpoint; there is no
/// extrapolation. Descending ranges (`r0 > r1`) are legal and make a layer
/// move against the scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMap {
    /// Scroll-position input domain.
    pub domain: ScrollRange,
    /// Output range `(r0, r1)`; any finite pair, either direction.
    pub range: (f64, f64),
}

impl ScrollMap {
    /// Mapping over an already validated domain.
    pub fn new(domain: ScrollRange, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Mapping from raw bounds; the domain is validated here.
    pub fn from_bounds(d0: f64, d1: f64, r0: f64, r1: f64) -> ScrollworkResult<Self> {
        Ok(Self::new(ScrollRange::new(d0, d1)?, (r0, r1)))
    }

    /// Check the invariants a deserialized mapping may have bypassed.
    pub fn validate(&self) -> ScrollworkResult<()> {
        self.domain.validate()?;
        if !(self.range.0.is_finite() && self.range.1.is_finite()) {
            return Err(ScrollworkError::mapping(
                "ScrollMap range bounds must be finite",
            ));
        }
        Ok(())
    }

    /// Sample the mapping at a scroll offset.
    pub fn sample(&self, offset: ScrollOffset) -> f64 {
        let t = self.domain.progress(offset.px());
        self.range.0 + (self.range.1 - self.range.0) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/map.rs"]
mod tests;
