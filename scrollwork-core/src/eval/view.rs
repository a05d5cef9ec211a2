use crate::{
    foundation::core::ScrollOffset,
    foundation::error::ScrollworkResult,
    parallax::layer::LayerOffset,
    scene::model::Page,
};

/// Fully evaluated page state for one scroll offset.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedView {
    /// Offset the view was evaluated at.
    pub offset: ScrollOffset,
    /// Whether the sticky call-to-action is shown at this offset (level, not
    /// edge; edge events come from [`crate::ScrollSession`]).
    pub cta_visible: bool,
    /// Sampled layer offsets in painter's order (declaration order).
    pub layers: Vec<EvaluatedLayer>,
}

/// One sampled parallax layer.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedLayer {
    /// Layer identifier.
    pub id: String,
    /// Derived offset pair.
    #[serde(flatten)]
    pub offset: LayerOffset,
}

/// Stateless evaluator from page description to per-offset view.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one scroll offset.
    ///
    /// Pure and idempotent: the view is a function of `(page, offset)` only,
    /// and every derived value inside one call reads the same offset
    /// snapshot, so the gate and the layers can never observe different
    /// positions for the same tick.
    #[tracing::instrument(skip(page))]
    pub fn eval_view(page: &Page, offset: ScrollOffset) -> ScrollworkResult<EvaluatedView> {
        page.validate()?;
        Ok(Self::eval_view_unchecked(page, offset))
    }

    pub(crate) fn eval_view_unchecked(page: &Page, offset: ScrollOffset) -> EvaluatedView {
        let layers = page
            .layers
            .iter()
            .map(|layer| EvaluatedLayer {
                id: layer.id.clone(),
                offset: layer.sample(offset),
            })
            .collect();

        EvaluatedView {
            offset,
            cta_visible: offset.px() > page.cta.threshold_px,
            layers,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/view.rs"]
mod tests;
