//! Process-scoped owner of the active theme, caches and animation state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::animation::controller::{AnimationController, ControllerOpts, TimerHandle};
use crate::animation::ease::Ease;
use crate::animation::liveness::{LivenessRegistry, WidgetId};
use crate::animation::transient::TransientTable;
use crate::assets::elements::{LayeredElements, SvgElements};
use crate::compose::compositor::{IndicatorRequest, PaintReport, WidgetPaint, paint_widget};
use crate::compose::frame::FrameOpts;
use crate::compose::label::LabelContent;
use crate::effects::cache::{PixmapCache, PixmapCacheStats};
use crate::foundation::core::{LayoutDirection, Rect, Size};
use crate::foundation::error::SkinResult;
use crate::geometry::size::{ContentRequest, content_size};
use crate::render::asset::AssetRenderer;
use crate::render::surface::Surface;
use crate::render::text::TextShaper;
use crate::spec::builtin::{builtin_svg, builtin_table};
use crate::spec::model::{ColorSpec, ThemeTable};
use crate::spec::resolver::SpecResolver;
use crate::state::kind::WidgetKind;
use crate::state::resolver::{StateName, WidgetFlags, resolve_state};

/// Engine tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// Opacity added per state-transition tick.
    pub opacity_step: u8,
    /// State-transition tick period in milliseconds.
    pub opacity_interval_ms: u64,
    /// Track units a busy progress chunk moves per tick.
    pub progress_step: u32,
    /// Busy-progress tick period in milliseconds.
    pub progress_interval_ms: u64,
    /// Duration of transient show/hide fades in milliseconds.
    pub transient_fade_ms: u64,
    /// Byte budget of the pixmap cache.
    pub cache_max_bytes: usize,
    /// Measure multi-line text exactly instead of estimating from the line count.
    pub exact_text_height: bool,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            opacity_step: 20,
            opacity_interval_ms: 40,
            progress_step: 2,
            progress_interval_ms: 50,
            transient_fade_ms: 300,
            cache_max_bytes: 32 * 1024 * 1024,
            exact_text_height: false,
        }
    }
}

impl EngineOpts {
    /// Return options with a different opacity step.
    pub fn with_opacity_step(mut self, step: u8) -> Self {
        self.opacity_step = step;
        self
    }

    /// Return options with a different state-transition tick period.
    pub fn with_opacity_interval(mut self, interval: Duration) -> Self {
        self.opacity_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Return options with a different busy-progress step.
    pub fn with_progress_step(mut self, step: u32) -> Self {
        self.progress_step = step;
        self
    }

    /// Return options with a different busy-progress tick period.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Return options with a different transient fade duration.
    pub fn with_transient_fade(mut self, duration: Duration) -> Self {
        self.transient_fade_ms = duration.as_millis() as u64;
        self
    }

    /// Return options with a different pixmap cache budget.
    pub fn with_cache_max_bytes(mut self, bytes: usize) -> Self {
        self.cache_max_bytes = bytes;
        self
    }

    /// Return options with exact multi-line text measurement toggled.
    pub fn with_exact_text_height(mut self, exact: bool) -> Self {
        self.exact_text_height = exact;
        self
    }

    fn controller(&self) -> ControllerOpts {
        ControllerOpts {
            opacity_step: self.opacity_step,
            opacity_interval: Duration::from_millis(self.opacity_interval_ms),
            progress_step: self.progress_step,
            progress_interval: Duration::from_millis(self.progress_interval_ms),
        }
    }
}

/// A parsed theme: spec tables plus the SVG element library.
#[derive(Debug)]
pub struct Theme {
    table: ThemeTable,
    elements: SvgElements,
    generation: u64,
}

impl Theme {
    /// Combine a spec table with its element library.
    pub fn new(table: ThemeTable, elements: SvgElements) -> Self {
        Self {
            table,
            elements,
            generation: 0,
        }
    }

    /// Build a theme from a spec table and raw SVG bytes.
    pub fn from_svg_data(table: ThemeTable, svg: &[u8]) -> SkinResult<Self> {
        Ok(Self::new(table, SvgElements::from_data(svg)?))
    }

    /// The built-in default theme.
    pub fn builtin() -> SkinResult<Self> {
        Self::from_svg_data(builtin_table(), builtin_svg().as_bytes())
    }

    /// Spec tables.
    pub fn table(&self) -> &ThemeTable {
        &self.table
    }

    /// Element library.
    pub fn elements(&self) -> &SvgElements {
        &self.elements
    }

    /// Install generation; bumped by every swap.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Shared, atomically swappable reference to the active theme.
///
/// Readers clone the inner `Arc` once and keep a consistent theme for as long as they hold it.
#[derive(Clone, Debug)]
pub struct ThemeHandle {
    inner: Arc<RwLock<Arc<Theme>>>,
    next_generation: Arc<AtomicU64>,
}

impl ThemeHandle {
    /// Handle with `theme` installed as generation 1.
    pub fn new(mut theme: Theme) -> Self {
        theme.generation = 1;
        Self {
            inner: Arc::new(RwLock::new(Arc::new(theme))),
            next_generation: Arc::new(AtomicU64::new(2)),
        }
    }

    /// The currently installed theme.
    pub fn snapshot(&self) -> Arc<Theme> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install `theme`, returning its generation.
    pub fn swap(&self, mut theme: Theme) -> u64 {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        theme.generation = generation;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(theme);
        generation
    }

    /// Generation of the currently installed theme.
    pub fn generation(&self) -> u64 {
        self.snapshot().generation
    }
}

/// Per-paint input describing one widget.
#[derive(Clone, Copy, Debug)]
pub struct PaintContext<'a> {
    /// Widget identity for animation tracking.
    pub widget: WidgetId,
    /// Widget category.
    pub kind: WidgetKind,
    /// Spec name override; the kind's default name when `None`.
    pub name: Option<&'a str>,
    /// Ambient widget flags.
    pub flags: WidgetFlags,
    /// Logical bounds.
    pub bounds: Rect,
    /// Layout direction.
    pub dir: LayoutDirection,
    /// Frame switches.
    pub frame: FrameOpts,
    /// Indicator glyph.
    pub indicator: Option<IndicatorRequest<'a>>,
    /// Icon and text.
    pub label: Option<LabelContent<'a>>,
    /// Caller palette overriding the theme colors for label text.
    pub palette: Option<&'a ColorSpec>,
    /// Push button is the dialog default.
    pub is_default: bool,
}

impl<'a> PaintContext<'a> {
    /// Context for an enabled widget of `kind` at `bounds`.
    pub fn new(widget: WidgetId, kind: WidgetKind, bounds: Rect) -> Self {
        Self {
            widget,
            kind,
            name: None,
            flags: WidgetFlags::enabled(),
            bounds,
            dir: LayoutDirection::default(),
            frame: FrameOpts::default(),
            indicator: None,
            label: None,
            palette: None,
            is_default: false,
        }
    }

    /// Same context with `flags`.
    pub fn with_flags(mut self, flags: WidgetFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Same context with `label`.
    pub fn with_label(mut self, label: LabelContent<'a>) -> Self {
        self.label = Some(label);
        self
    }

    /// Same context with an explicit spec name.
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Same context with an indicator glyph.
    pub fn with_indicator(mut self, indicator: IndicatorRequest<'a>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Same context in `dir`.
    pub fn with_direction(mut self, dir: LayoutDirection) -> Self {
        self.dir = dir;
        self
    }
}

/// Rendering engine bound to one active theme.
pub struct Engine {
    opts: EngineOpts,
    theme: ThemeHandle,
    fallback: Arc<Theme>,
    cache: PixmapCache,
    cache_generation: u64,
    controller: AnimationController,
    transients: TransientTable,
    liveness: LivenessRegistry,
    shaper: Box<dyn TextShaper>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("opts", &self.opts)
            .field("generation", &self.cache_generation)
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Engine painting `theme`, with the built-in theme as fallback.
    #[tracing::instrument(skip_all, fields(theme = %theme.table.theme.name))]
    pub fn new(theme: Theme, shaper: Box<dyn TextShaper>, opts: EngineOpts) -> SkinResult<Self> {
        let fallback = Arc::new(Theme::builtin()?);
        let handle = ThemeHandle::new(theme);
        let cache_generation = handle.generation();
        tracing::debug!(generation = cache_generation, "theme installed");
        Ok(Self {
            cache: PixmapCache::new(opts.cache_max_bytes),
            controller: AnimationController::new(opts.controller()),
            transients: TransientTable::new(Duration::from_millis(opts.opacity_interval_ms)),
            liveness: LivenessRegistry::new(),
            opts,
            theme: handle,
            fallback,
            cache_generation,
            shaper,
        })
    }

    /// Engine painting the built-in theme.
    pub fn with_builtin_theme(shaper: Box<dyn TextShaper>, opts: EngineOpts) -> SkinResult<Self> {
        Self::new(Theme::builtin()?, shaper, opts)
    }

    /// Options in effect.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Handle to the active theme, shareable with other threads.
    pub fn theme_handle(&self) -> ThemeHandle {
        self.theme.clone()
    }

    /// Switch to `theme`: cached pixmaps and running animations are discarded.
    #[tracing::instrument(skip_all, fields(theme = %theme.table.theme.name))]
    pub fn install_theme(&mut self, theme: Theme) -> u64 {
        let generation = self.theme.swap(theme);
        self.sync_generation(generation);
        self.controller.reset();
        self.transients.clear();
        generation
    }

    /// Drop cached pixmaps, e.g. after a device-pixel-ratio change.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Pixmap cache counters.
    pub fn cache_stats(&self) -> PixmapCacheStats {
        self.cache.stats()
    }

    /// Allocate an id for a new widget.
    pub fn register_widget(&mut self) -> WidgetId {
        self.liveness.register()
    }

    /// Forget `id`; running animations of the widget end silently.
    pub fn destroy_widget(&mut self, id: WidgetId) {
        if self.liveness.destroy(id) {
            self.controller.widget_destroyed(id);
            self.transients.owner_destroyed(id);
        }
    }

    /// Liveness registry.
    pub fn liveness(&self) -> &LivenessRegistry {
        &self.liveness
    }

    /// State-transition and busy-progress controller.
    pub fn animations(&self) -> &AnimationController {
        &self.controller
    }

    /// Opacity timer the host should poll.
    pub fn opacity_timer(&self) -> TimerHandle {
        self.controller.opacity_timer()
    }

    /// Progress timer the host should poll.
    pub fn progress_timer(&self) -> TimerHandle {
        self.controller.progress_timer()
    }

    /// Transient-fade timer the host should poll.
    pub fn transient_timer(&self) -> TimerHandle {
        self.transients.timer()
    }

    /// Advance state transitions. Returns the widgets to repaint.
    pub fn on_opacity_tick(&mut self) -> Vec<WidgetId> {
        self.controller.on_opacity_tick(&self.liveness)
    }

    /// Advance busy progress bars. Returns the widgets to repaint.
    pub fn on_progress_tick(&mut self) -> Vec<WidgetId> {
        self.controller.on_progress_tick(&self.liveness)
    }

    /// Advance transient fades to `now`. Returns the widgets to repaint.
    pub fn on_transient_tick(&mut self, now: Instant) -> Vec<WidgetId> {
        self.transients.on_transient_tick(now, &self.liveness)
    }

    /// Start or stop animating `id` as a busy progress bar.
    pub fn set_busy(&mut self, id: WidgetId, busy: bool) {
        if busy && self.liveness.is_alive(id) {
            self.controller.start_busy(id);
        } else {
            self.controller.stop_busy(id);
        }
    }

    /// Fade an auto-hiding element of `owner` in or out starting at `now`.
    ///
    /// Ignored when the active theme does not use transient scroll bars.
    pub fn fade_transient(&mut self, owner: WidgetId, show: bool, now: Instant) {
        if !self.theme.snapshot().table.theme.transient_scrollbar
            || !self.liveness.is_alive(owner)
        {
            return;
        }
        let (from, to) = if show { (0.0, 1.0) } else { (1.0, 0.0) };
        let duration = Duration::from_millis(self.opts.transient_fade_ms);
        self.transients
            .start(owner, from, to, now, duration, Ease::OutQuad);
    }

    /// Opacity of `owner`'s transient element at `now`, when fading.
    pub fn transient_opacity(&self, owner: WidgetId, now: Instant) -> Option<f32> {
        self.transients.value(owner, now)
    }

    /// Minimum content size of a widget of `kind`.
    pub fn content_size(&mut self, kind: WidgetKind, req: &ContentRequest<'_>) -> Size {
        let theme = self.theme.snapshot();
        let resolver = SpecResolver::new(&theme.table, &self.fallback.table);
        let mut req = *req;
        if kind == WidgetKind::PushButton && resolver.hacks().iconless_pushbutton {
            req.icon = None;
        }
        content_size(
            &resolver,
            self.shaper.as_mut(),
            &req,
            self.opts.exact_text_height,
        )
    }

    /// Paint one widget into `target`.
    ///
    /// The state resolved from `ctx.flags` is recorded; a change of an animated kind starts a
    /// crossfade that later opacity ticks advance.
    #[tracing::instrument(skip_all, fields(widget = ctx.widget.as_u64(), kind = ?ctx.kind))]
    pub fn paint(&mut self, target: &mut Surface, ctx: &PaintContext<'_>) -> SkinResult<PaintReport> {
        let theme = self.theme.snapshot();
        self.sync_generation(theme.generation);
        let resolver = SpecResolver::new(&theme.table, &self.fallback.table);
        let hacks = resolver.hacks();
        let class = ctx.kind.classify();

        let mut state = resolve_state(&ctx.flags, &class.rules);
        if ctx.is_default
            && ctx.kind == WidgetKind::PushButton
            && state.name == StateName::Normal
            && !hacks.normal_default_pushbutton
        {
            state.name = StateName::Focused;
        }

        let animate = class.rules.animated
            && resolver.theme().animate_states
            && self.liveness.is_alive(ctx.widget);
        let transition = if animate {
            self.controller.state_changed(ctx.widget, state.name)
        } else {
            self.controller.set_state_instant(ctx.widget, state.name);
            None
        };

        let mut label = ctx.label;
        if ctx.kind == WidgetKind::PushButton && hacks.iconless_pushbutton {
            label = label.map(|l| LabelContent { icon: None, ..l });
        }

        let req = WidgetPaint {
            widget: ctx.name.unwrap_or(class.widget_name),
            state,
            bounds: ctx.bounds,
            frame: ctx.frame,
            dir: ctx.dir,
            indicator: ctx.indicator,
            label,
            palette: ctx.palette,
            transition,
            exact_text_height: self.opts.exact_text_height,
        };
        let elements = LayeredElements::new(&theme.elements, &self.fallback.elements);
        let mut renderer = AssetRenderer::new(&elements, &mut self.cache, theme.generation);
        paint_widget(
            &resolver,
            &mut renderer,
            self.shaper.as_mut(),
            target,
            &req,
        )
    }

    fn sync_generation(&mut self, generation: u64) {
        if generation != self.cache_generation {
            tracing::debug!(
                from = self.cache_generation,
                to = generation,
                "theme swapped, clearing pixmap cache"
            );
            self.cache.clear();
            self.cache_generation = generation;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
