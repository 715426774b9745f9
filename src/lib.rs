//! skinweave is the rendering core of an SVG-skinned widget styling engine.
//!
//! A paint call resolves a widget's ambient flags to one canonical state, looks up the
//! widget's specs in the active theme and composes the visual in fixed layer order:
//!
//! - Frame: nine-patch border built from `{element}-{state}-{part}` SVG elements
//! - Interior: stretched or tiled fill inside the border
//! - Indicator and label: glyph, icon and text inside the interior
//!
//! Element rasters and icon effects are memoized in a byte-bounded [`PixmapCache`], and state
//! changes are blended over time by the [`AnimationController`]. [`Engine`] owns all of it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// State transitions, busy progress and transient fades.
pub mod animation;
/// Bitmaps, icon decoding and SVG element libraries.
pub mod assets;
/// Layer composition.
pub mod compose;
/// Raster effects and caching.
pub mod effects;
/// Theme ownership and the paint entry point.
pub mod engine;
/// Content size calculation.
pub mod geometry;
/// Element rendering and surfaces.
pub mod render;
/// Spec data and lookup.
pub mod spec;
/// Widget state resolution.
pub mod state;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use crate::foundation::core::{
    Alignment, DeviceRect, HAlign, Insets, LayoutDirection, Point, Rect, Rgba8, Size, VAlign,
    shrink_rect, squared_rect,
};
pub use crate::foundation::error::{SkinError, SkinResult};

pub use crate::animation::controller::{AnimationController, AnimationEntry, TimerHandle};
pub use crate::animation::ease::Ease;
pub use crate::animation::liveness::{LivenessRegistry, WidgetId};
pub use crate::assets::bitmap::{Bitmap, BitmapId};
pub use crate::assets::decode::decode_icon;
pub use crate::assets::elements::{ElementSource, LayeredElements, SvgElements};
pub use crate::compose::compositor::{
    FadeDirection, IndicatorRequest, Layer, PaintReport, Transition, WidgetPaint,
};
pub use crate::compose::frame::FrameOpts;
pub use crate::compose::label::{ColorRole, LabelContent};
pub use crate::compose::rects::{TabGap, TabPosition};
pub use crate::effects::cache::{Effect, PixmapCache, PixmapCacheStats};
pub use crate::engine::{Engine, EngineOpts, PaintContext, Theme, ThemeHandle};
pub use crate::geometry::size::ContentRequest;
pub use crate::render::asset::GroupSides;
pub use crate::render::surface::Surface;
pub use crate::render::text::{ParleyShaper, TextMetrics, TextShaper};
pub use crate::spec::model::{
    ColorSpec, FrameSpec, HacksSpec, IconTextArrangement, IndicatorSpec, InteriorSpec,
    LabelSpec, SizeSpec, TextShadow, ThemeSpec, ThemeTable,
};
pub use crate::spec::resolver::SpecResolver;
pub use crate::state::kind::WidgetKind;
pub use crate::state::resolver::{StateName, WidgetFlags, WidgetState};
