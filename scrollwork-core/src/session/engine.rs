use std::collections::BTreeMap;

use crate::{
    eval::view::{EvaluatedView, Evaluator},
    foundation::core::{Rect, ScrollOffset, Viewport},
    foundation::error::{ScrollworkError, ScrollworkResult},
    scene::model::{EntranceSpec, Page},
    visibility::intersection::EntranceTrigger,
    visibility::threshold::ThresholdGate,
};

/// Event emitted by [`ScrollSession`] on a state transition.
///
/// Events carry edges only; levels live in the [`EvaluatedView`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ScrollEvent {
    /// The sticky call-to-action crossed into view.
    CtaShown,
    /// The sticky call-to-action crossed out of view.
    CtaHidden,
    /// A block intersected the viewport for the first time; the host plays
    /// the carried entrance transition once.
    BlockEntered {
        /// Block identifier.
        id: String,
        /// Entrance transition to play.
        entrance: EntranceSpec,
    },
}

/// Result of one scroll tick: the evaluated view plus any edge events.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SessionTick {
    /// View evaluated at the tick's offset snapshot.
    pub view: EvaluatedView,
    /// Edge-triggered events, empty on most ticks.
    pub events: Vec<ScrollEvent>,
}

/// Stateful engine over a validated [`Page`].
///
/// Owns everything with a lifetime: the call-to-action gate and one one-shot
/// entrance trigger per block. The session itself performs no IO and holds no
/// clock; feed it offsets from a [`crate::ScrollSignal`] subscriber (or call
/// [`ScrollSession::advance`] directly) and report block layout through
/// [`ScrollSession::observe_block`].
#[derive(Debug)]
pub struct ScrollSession {
    page: Page,
    gate: ThresholdGate,
    triggers: BTreeMap<String, EntranceTrigger>,
}

impl ScrollSession {
    /// Build a session for `page`. The page is validated once here; every
    /// later tick evaluates without revalidating.
    pub fn new(page: Page) -> ScrollworkResult<Self> {
        page.validate()?;
        let gate = ThresholdGate::new(page.cta.threshold_px);
        let triggers = page
            .blocks
            .iter()
            .map(|block| (block.id.clone(), EntranceTrigger::default()))
            .collect();
        Ok(Self {
            page,
            gate,
            triggers,
        })
    }

    /// The page this session runs.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Current call-to-action state.
    pub fn cta_visible(&self) -> bool {
        self.gate.visible()
    }

    /// Advance one scroll tick.
    ///
    /// The gate and every layer are computed from the single `offset`
    /// snapshot passed here, so dependents cannot tear within a tick. The
    /// returned events contain at most one call-to-action edge.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self, offset: ScrollOffset) -> SessionTick {
        let view = Evaluator::eval_view_unchecked(&self.page, offset);
        let mut events = Vec::new();
        if let Some(shown) = self.gate.update(offset) {
            events.push(if shown {
                ScrollEvent::CtaShown
            } else {
                ScrollEvent::CtaHidden
            });
        }
        SessionTick { view, events }
    }

    /// Run the one-shot entrance trigger for block `id` against its current
    /// bounding box (in viewport coordinates).
    ///
    /// Returns the entrance event the first time the block clears the
    /// conservative margin, `None` on every later call, and an error for ids
    /// the page does not declare.
    pub fn observe_block(
        &mut self,
        id: &str,
        bounds: Rect,
        viewport: Viewport,
    ) -> ScrollworkResult<Option<ScrollEvent>> {
        let Some(block) = self.page.blocks.iter().find(|b| b.id == id) else {
            return Err(ScrollworkError::evaluation(format!(
                "unknown block id '{id}'"
            )));
        };
        let Some(trigger) = self.triggers.get_mut(id) else {
            return Err(ScrollworkError::evaluation(format!(
                "unknown block id '{id}'"
            )));
        };
        if !trigger.observe(bounds, viewport) {
            return Ok(None);
        }
        Ok(Some(ScrollEvent::BlockEntered {
            id: block.id.clone(),
            entrance: block.entrance.clone(),
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/engine.rs"]
mod tests;
