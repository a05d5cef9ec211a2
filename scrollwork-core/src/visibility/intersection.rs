use crate::foundation::core::{Rect, Viewport};

/// Default conservative entrance margin in pixels.
///
/// The margin shrinks the effective viewport on every side, so a block must
/// be this far inside before its entrance fires (slightly late, never early).
pub const ENTRANCE_VIEWPORT_MARGIN_PX: f64 = 50.0;

/// One-shot detector for a content block entering the viewport.
///
/// Two states, `NotTriggered -> Triggered`, transitioning only in that
/// direction. Once fired, the entrance is permanently considered played for
/// the block's lifetime; scrolling away and back must not replay it.
#[derive(Clone, Copy, Debug)]
pub struct EntranceTrigger {
    margin: f64,
    fired: bool,
}

impl EntranceTrigger {
    /// Trigger with the given viewport margin, not yet fired.
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            fired: false,
        }
    }

    /// True once the trigger has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Observe one layout pass.
    ///
    /// `block` is the block's bounding box in viewport coordinates (as the
    /// host reports it for the current scroll position). Returns `true`
    /// exactly once, the first time the block overlaps the inset viewport
    /// with positive area; every later observation returns `false`.
    pub fn observe(&mut self, block: Rect, viewport: Viewport) -> bool {
        if self.fired {
            return false;
        }
        if !overlaps(block, viewport.inset(self.margin)) {
            return false;
        }
        self.fired = true;
        true
    }
}

impl Default for EntranceTrigger {
    fn default() -> Self {
        Self::new(ENTRANCE_VIEWPORT_MARGIN_PX)
    }
}

/// Positive-area overlap; touching edges do not count.
fn overlaps(a: Rect, b: Rect) -> bool {
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1);
    let y1 = a.y1.min(b.y1);
    x0 < x1 && y0 < y1
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/intersection.rs"]
mod tests;
