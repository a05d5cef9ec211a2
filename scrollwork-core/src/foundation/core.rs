use crate::foundation::error::{ScrollworkError, ScrollworkResult};

pub use kurbo::{Point, Rect, Vec2};

/// Vertical scroll offset in CSS pixels from the top of the page.
///
/// Updated by the host environment, read-only to every consumer, and reset to
/// zero on page load. All derived state in this crate is a pure function of
/// the current offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset(pub f64);

impl ScrollOffset {
    /// Offset at the top of the page.
    pub const TOP: Self = Self(0.0);

    /// Raw offset in pixels.
    pub fn px(self) -> f64 {
        self.0
    }
}

/// Scroll-position input domain `[start, end]` for a mapping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Domain start in pixels.
    pub start: f64,
    /// Domain end in pixels; must be strictly greater than `start`.
    pub end: f64,
}

impl ScrollRange {
    /// Build a validated range. Degenerate or non-finite domains are rejected.
    pub fn new(start: f64, end: f64) -> ScrollworkResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Check the invariants a deserialized range may have bypassed.
    pub fn validate(self) -> ScrollworkResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ScrollworkError::validation(
                "ScrollRange bounds must be finite",
            ));
        }
        if self.start >= self.end {
            return Err(ScrollworkError::validation(
                "ScrollRange start must be < end",
            ));
        }
        Ok(())
    }

    /// Domain width in pixels.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// True when `x` lies inside the domain (inclusive at both ends).
    pub fn contains(self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// Normalized progress of `x` through the domain, clamped to `[0, 1]`.
    pub fn progress(self, x: f64) -> f64 {
        ((x - self.start) / self.span()).clamp(0.0, 1.0)
    }
}

/// Visible screen area with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a validated viewport; both dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> ScrollworkResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ScrollworkError::validation(
                "Viewport dimensions must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The viewport as a rectangle in its own coordinate space.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The viewport shrunk by `margin` pixels on every side.
    ///
    /// A positive margin produces the conservative trigger area used by
    /// entrance detection; a margin of at least half the smaller dimension
    /// yields an empty area that nothing can intersect.
    pub fn inset(self, margin: f64) -> Rect {
        Rect::new(margin, margin, self.width - margin, self.height - margin)
    }
}
