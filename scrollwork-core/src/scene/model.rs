use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::ScrollRange,
    foundation::error::{ScrollworkError, ScrollworkResult},
    parallax::layer::ParallaxLayer,
    parallax::map::ScrollMap,
    scene::ease::Ease,
    visibility::threshold::CTA_SCROLL_THRESHOLD_PX,
};

/// A complete scroll-driven page description.
///
/// A page is a pure data model that can be:
/// - built programmatically
/// - serialized/deserialized via Serde (JSON)
///
/// Evaluating a page for one scroll offset is done by
/// [`crate::Evaluator::eval_view`]; stateful wiring (edge events, one-shot
/// entrances) lives in [`crate::ScrollSession`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Page {
    /// Anchor-addressable page sections, in document order.
    pub sections: Vec<Section>,
    /// Navigation links; every anchor must name a section id.
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Animated content blocks.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Decorative parallax layers, painter's order.
    #[serde(default)]
    pub layers: Vec<ParallaxLayer>,
    /// Sticky call-to-action.
    pub cta: StickyCta,
}

/// An anchor-addressable section of the page.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Anchor id, unique within the page.
    pub id: String,
    /// Heading shown for the section.
    pub title: String,
}

/// A navigation entry pointing at a section anchor.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    /// Link label.
    pub label: String,
    /// Target section id.
    pub anchor: String,
}

/// An animated content block inside a section.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Block {
    /// Block identifier, unique within the page.
    pub id: String,
    /// Owning section id.
    pub section: String,
    /// Entrance transition played the first time the block becomes visible.
    #[serde(default)]
    pub entrance: EntranceSpec,
}

/// One-time entrance transition for a content block.
///
/// The engine carries no clock; this is data delivered with the
/// block-entered event, and the host plays the transition. Replays are
/// impossible because the underlying trigger is terminal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceSpec {
    /// Delay before the transition starts, in seconds.
    #[serde(default)]
    pub delay_s: f64,
    /// Transition duration in seconds.
    #[serde(default = "default_entrance_duration_s")]
    pub duration_s: f64,
    /// Easing curve over the transition.
    #[serde(default = "default_entrance_ease")]
    pub ease: Ease,
    /// Upward travel distance in pixels (fade-and-rise).
    #[serde(default = "default_entrance_rise_px")]
    pub rise_px: f64,
}

impl EntranceSpec {
    /// Entrance delayed by `index` steps of `step_s` seconds, for staggering
    /// card grids.
    pub fn stagger(step_s: f64, index: usize) -> Self {
        Self {
            delay_s: step_s * index as f64,
            ..Self::default()
        }
    }
}

impl Default for EntranceSpec {
    fn default() -> Self {
        Self {
            delay_s: 0.0,
            duration_s: default_entrance_duration_s(),
            ease: default_entrance_ease(),
            rise_px: default_entrance_rise_px(),
        }
    }
}

fn default_entrance_duration_s() -> f64 {
    0.8
}

fn default_entrance_ease() -> Ease {
    Ease::OutCubic
}

fn default_entrance_rise_px() -> f64 {
    30.0
}

/// The sticky call-to-action button.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StickyCta {
    /// Button label.
    pub label: String,
    /// Scroll depth past which the button is shown (strict comparison).
    #[serde(default = "default_cta_threshold_px")]
    pub threshold_px: f64,
}

fn default_cta_threshold_px() -> f64 {
    CTA_SCROLL_THRESHOLD_PX
}

impl Page {
    /// Validate cross-references and per-item invariants.
    pub fn validate(&self) -> ScrollworkResult<()> {
        let mut section_ids = BTreeSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(ScrollworkError::validation("section id must be non-empty"));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(ScrollworkError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        for link in &self.nav {
            if !section_ids.contains(link.anchor.as_str()) {
                return Err(ScrollworkError::validation(format!(
                    "nav link '{}' targets unknown section '{}'",
                    link.label, link.anchor
                )));
            }
        }

        let mut block_ids = BTreeSet::new();
        for block in &self.blocks {
            if block.id.trim().is_empty() {
                return Err(ScrollworkError::validation("block id must be non-empty"));
            }
            if !block_ids.insert(block.id.as_str()) {
                return Err(ScrollworkError::validation(format!(
                    "duplicate block id '{}'",
                    block.id
                )));
            }
            if !section_ids.contains(block.section.as_str()) {
                return Err(ScrollworkError::validation(format!(
                    "block '{}' belongs to unknown section '{}'",
                    block.id, block.section
                )));
            }
            if !(block.entrance.delay_s >= 0.0 && block.entrance.delay_s.is_finite()) {
                return Err(ScrollworkError::validation(format!(
                    "block '{}' entrance delay must be finite and >= 0",
                    block.id
                )));
            }
            if !(block.entrance.duration_s > 0.0 && block.entrance.duration_s.is_finite()) {
                return Err(ScrollworkError::validation(format!(
                    "block '{}' entrance duration must be finite and > 0",
                    block.id
                )));
            }
        }

        let mut layer_ids = BTreeSet::new();
        for layer in &self.layers {
            layer.validate()?;
            if !layer_ids.insert(layer.id.as_str()) {
                return Err(ScrollworkError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }

        if !(self.cta.threshold_px.is_finite() && self.cta.threshold_px >= 0.0) {
            return Err(ScrollworkError::validation(
                "cta threshold must be finite and >= 0",
            ));
        }

        Ok(())
    }

    /// Parse and validate a page from JSON.
    pub fn from_json(json: &str) -> ScrollworkResult<Self> {
        let page: Self =
            serde_json::from_str(json).map_err(|e| ScrollworkError::serde(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    /// Read, parse, and validate a page document from disk.
    pub fn from_path(path: &Path) -> ScrollworkResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read page document '{}'", path.display()))?;
        Self::from_json(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ScrollworkResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScrollworkError::serde(e.to_string()))
    }

    /// A small demonstration page: four sections, a staggered card grid, and
    /// a three-layer background (drift down, counter-drift up, slow tilt).
    pub fn default_demo() -> Self {
        let sections = vec![
            Section {
                id: "method".to_string(),
                title: "The Method".to_string(),
            },
            Section {
                id: "deliverables".to_string(),
                title: "What You Get".to_string(),
            },
            Section {
                id: "mentor".to_string(),
                title: "The Mentor".to_string(),
            },
            Section {
                id: "faq".to_string(),
                title: "Questions".to_string(),
            },
        ];
        let nav = sections
            .iter()
            .map(|s| NavLink {
                label: s.title.clone(),
                anchor: s.id.clone(),
            })
            .collect();
        let blocks = (0..3)
            .map(|i| Block {
                id: format!("method-card-{i}"),
                section: "method".to_string(),
                entrance: EntranceSpec::stagger(0.2, i),
            })
            .chain(std::iter::once(Block {
                id: "mentor-bio".to_string(),
                section: "mentor".to_string(),
                entrance: EntranceSpec::default(),
            }))
            .collect();
        let layers = vec![
            ParallaxLayer {
                id: "glow-top".to_string(),
                translate_y: ScrollMap::new(
                    ScrollRange {
                        start: 0.0,
                        end: 2000.0,
                    },
                    (0.0, 400.0),
                ),
                rotate_deg: None,
            },
            ParallaxLayer {
                id: "glow-counter".to_string(),
                translate_y: ScrollMap::new(
                    ScrollRange {
                        start: 0.0,
                        end: 2000.0,
                    },
                    (0.0, -240.0),
                ),
                rotate_deg: None,
            },
            ParallaxLayer {
                id: "tendril".to_string(),
                translate_y: ScrollMap::new(
                    ScrollRange {
                        start: 400.0,
                        end: 2400.0,
                    },
                    (0.0, 120.0),
                ),
                rotate_deg: Some(ScrollMap::new(
                    ScrollRange {
                        start: 400.0,
                        end: 2400.0,
                    },
                    (0.0, 10.0),
                )),
            },
        ];
        Self {
            sections,
            nav,
            blocks,
            layers,
            cta: StickyCta {
                label: "Apply now".to_string(),
                threshold_px: CTA_SCROLL_THRESHOLD_PX,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
