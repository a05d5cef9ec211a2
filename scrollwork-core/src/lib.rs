//! Scrollwork is a scroll-driven presentation engine with a build-time image
//! pipeline.
//!
//! The engine turns a declarative page description (`Page`) plus the host's
//! scroll offset into derived visual state, and a separate batch tool rewrites
//! raster assets as WebP before deployment.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`Page`] declares sections, nav anchors, animated
//!    blocks, parallax layers, and the sticky call-to-action.
//! 2. **Evaluate**: `Page + ScrollOffset -> EvaluatedView` (what each layer
//!    shows, whether the call-to-action is up) via [`Evaluator`].
//! 3. **React**: a [`ScrollSession`] turns successive offsets into
//!    edge-triggered events (call-to-action shown/hidden, one-shot block
//!    entrances) for the host to animate.
//! 4. **Convert** (build time): [`convert_tree`] batch-rewrites JPEG/PNG
//!    assets as lossy WebP with skip-if-newer and per-file recovery.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure evaluation**: every derived value is a function of the current
//!   offset; within one tick all dependents observe the same snapshot.
//! - **RAII subscriptions**: scroll callbacks release through
//!   [`Subscription`] guards, so stale-callback teardown bugs cannot exist.
//! - **No IO in the UI core**: file IO lives only in the conversion pipeline.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod convert;
mod eval;
mod foundation;
mod parallax;
mod scene;
mod session;
mod signal;
mod visibility;

pub use assets::decode::{DecodedImage, decode_image, downscale_to_width};
pub use assets::encode::encode_webp;
pub use convert::batch::{
    ConvertEntry, ConvertOpts, ConvertReport, FileOutcome, RASTER_EXTENSIONS, convert_tree,
};
pub use eval::view::{EvaluatedLayer, EvaluatedView, Evaluator};
pub use foundation::core::{Point, Rect, ScrollOffset, ScrollRange, Vec2, Viewport};
pub use foundation::error::{ScrollworkError, ScrollworkResult};
pub use parallax::layer::{LayerOffset, ParallaxLayer};
pub use parallax::map::ScrollMap;
pub use scene::ease::Ease;
pub use scene::model::{Block, EntranceSpec, NavLink, Page, Section, StickyCta};
pub use session::engine::{ScrollEvent, ScrollSession, SessionTick};
pub use signal::scroll::{ScrollSignal, Subscription};
pub use visibility::intersection::{ENTRANCE_VIEWPORT_MARGIN_PX, EntranceTrigger};
pub use visibility::threshold::{CTA_SCROLL_THRESHOLD_PX, ThresholdGate};
