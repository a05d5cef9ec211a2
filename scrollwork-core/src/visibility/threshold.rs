use crate::foundation::core::ScrollOffset;

/// Scroll depth past which the sticky call-to-action is shown.
pub const CTA_SCROLL_THRESHOLD_PX: f64 = 800.0;

/// Edge-triggered visibility gate for the sticky call-to-action.
///
/// The visible state is a pure function of the current offset
/// (`offset > threshold`, strict). [`ThresholdGate::update`] recomputes it on
/// every tick but reports only transitions, so redundant ticks cannot restart
/// a show/hide animation in the host.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdGate {
    threshold: f64,
    visible: bool,
}

impl ThresholdGate {
    /// Gate with the given threshold, starting hidden.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last computed state.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Pure predicate: shown strictly past the threshold. At exactly the
    /// threshold the gate stays hidden.
    pub fn is_past(&self, offset: ScrollOffset) -> bool {
        offset.px() > self.threshold
    }

    /// Recompute for a new offset. Returns `Some(new_state)` only when the
    /// state flips; identical recomputations return `None`.
    pub fn update(&mut self, offset: ScrollOffset) -> Option<bool> {
        let next = self.is_past(offset);
        if next == self.visible {
            return None;
        }
        self.visible = next;
        Some(next)
    }
}

impl Default for ThresholdGate {
    fn default() -> Self {
        Self::new(CTA_SCROLL_THRESHOLD_PX)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/threshold.rs"]
mod tests;
