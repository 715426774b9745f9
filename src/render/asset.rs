use crate::assets::bitmap::Bitmap;
use crate::assets::elements::ElementSource;
use crate::effects::cache::{CacheKey, Effect, PixmapCache};
use crate::foundation::core::{DeviceRect, Insets, Rect};
use crate::render::surface::Surface;

/// How an element covers its destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Scale the whole element to the destination.
    #[default]
    Stretch,
    /// Repeat a `px`x`py` logical pattern unit; a zero size stretches on that axis.
    Tile {
        /// Horizontal unit size.
        px: u32,
        /// Vertical unit size.
        py: u32,
    },
}

impl FillMode {
    /// Tile when either pattern size is set, stretch otherwise.
    pub fn from_pattern(px: u32, py: u32) -> Self {
        if px == 0 && py == 0 {
            Self::Stretch
        } else {
            Self::Tile { px, py }
        }
    }
}

/// Per-draw options of [`AssetRenderer::render_element`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawOpts {
    /// Render into an offscreen bitmap first so `effect` can operate on raster data.
    pub use_pixmap: bool,
    /// Flip horizontally.
    pub mirror: bool,
    /// Raster effect; implies `use_pixmap`.
    pub effect: Effect,
    /// Paint opacity in `[0, 1]`.
    pub opacity: f32,
    /// Only touch pixels inside this device rectangle.
    pub clip: Option<DeviceRect>,
    /// Never touch pixels inside this device rectangle.
    pub exclude: Option<DeviceRect>,
}

impl Default for DrawOpts {
    fn default() -> Self {
        Self {
            use_pixmap: false,
            mirror: false,
            effect: Effect::None,
            opacity: 1.0,
            clip: None,
            exclude: None,
        }
    }
}

/// Sides of a frame that abut grouped siblings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GroupSides {
    /// A sibling touches the left side.
    pub left: bool,
    /// A sibling touches the right side.
    pub right: bool,
    /// A sibling touches the top side.
    pub top: bool,
    /// A sibling touches the bottom side.
    pub bottom: bool,
}

impl GroupSides {
    /// No grouped side.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// Return `true` when any side is grouped.
    pub fn any(self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// How frame edges cover their strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Stretch each edge piece along its strip.
    #[default]
    Stretch,
    /// Repeat each edge piece at its authored aspect ratio.
    Tile,
}

/// Nine-patch drawing parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NinePatch {
    /// Edge fill.
    pub edges: EdgeMode,
    /// Sides abutting a neighbour: no edge piece, corners continue the adjacent edge.
    pub grouped: GroupSides,
    /// Device area left unpainted (tab gap).
    pub exclude: Option<DeviceRect>,
}

/// Edge anchoring of slider tick marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickPosition {
    /// Above a horizontal slider, left of a vertical one.
    #[default]
    Above,
    /// Below a horizontal slider, right of a vertical one.
    Below,
    /// On both sides.
    Both,
}

/// Slider tick layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderTicks {
    /// Minimum slider value.
    pub min: i32,
    /// Maximum slider value.
    pub max: i32,
    /// Value distance between ticks; values `<= 0` mean `1`.
    pub interval: i32,
    /// Values grow right-to-left (or bottom-to-top).
    pub inverted: bool,
    /// The slider runs horizontally.
    pub horizontal: bool,
    /// Tick anchoring.
    pub position: TickPosition,
    /// Tick length across the slider axis, in logical pixels.
    pub length: f64,
    /// Length of the slider handle along the axis; ticks are inset by half of it.
    pub handle_len: f64,
}

const MAX_TICKS: i64 = 1024;

/// Renders named vector elements into surfaces, going through the pixmap cache.
///
/// Missing elements and empty destinations render nothing.
pub struct AssetRenderer<'a> {
    elements: &'a dyn ElementSource,
    cache: &'a mut PixmapCache,
    generation: u64,
}

impl<'a> AssetRenderer<'a> {
    /// Bind a renderer to an element library, a cache and the current theme generation.
    pub fn new(
        elements: &'a dyn ElementSource,
        cache: &'a mut PixmapCache,
        generation: u64,
    ) -> Self {
        Self {
            elements,
            cache,
            generation,
        }
    }

    /// Return `true` when `id` names a drawable element.
    pub fn has_element(&self, id: &str) -> bool {
        self.elements.has_element(id)
    }

    /// Cached raster of `id` at `width`x`height` device pixels.
    pub fn element_bitmap(
        &mut self,
        id: &str,
        width: u32,
        height: u32,
        dpr: f64,
    ) -> Option<Bitmap> {
        if width == 0 || height == 0 || id.is_empty() {
            return None;
        }
        let elements = self.elements;
        let key = CacheKey::element(id, width, height, dpr, self.generation);
        match self
            .cache
            .get_or_try_insert_with(key, || elements.rasterize(id, width, height))
        {
            Ok(b) => b,
            Err(err) => {
                tracing::warn!(element = id, %err, "element rasterization failed");
                None
            }
        }
    }

    /// `bitmap` resampled to `width`x`height` device pixels, memoized by content identity.
    pub fn scaled_bitmap(
        &mut self,
        bitmap: &Bitmap,
        width: u32,
        height: u32,
        dpr: f64,
    ) -> Bitmap {
        if (width, height) == (bitmap.width(), bitmap.height()) {
            return bitmap.clone();
        }
        let key = CacheKey {
            width,
            height,
            ..CacheKey::effect(bitmap, Effect::None, dpr, self.generation)
        };
        match self
            .cache
            .get_or_try_insert_with(key, || Ok(Some(bitmap.resized(width, height))))
        {
            Ok(Some(b)) => b,
            _ => bitmap.resized(width, height),
        }
    }

    /// Apply a raster effect through the cache.
    pub fn apply_effect(&mut self, bitmap: &Bitmap, effect: Effect, dpr: f64) -> Bitmap {
        self.cache.apply_effect(bitmap, effect, dpr, self.generation)
    }

    /// Render `id` into the logical `rect` of `target`. Returns `true` when anything was drawn.
    pub fn render_element(
        &mut self,
        target: &mut Surface,
        id: &str,
        rect: Rect,
        mode: FillMode,
        opts: DrawOpts,
    ) -> bool {
        let dev = target.device_rect(rect);
        if dev.is_empty() || !self.elements.has_element(id) {
            return false;
        }
        let clips = clip_list(dev, opts.clip, opts.exclude);
        if clips.is_empty() {
            return false;
        }

        if opts.use_pixmap || opts.effect != Effect::None {
            let Some(bmp) = self.render_to_bitmap(id, rect, mode, opts.mirror, target.dpr()) else {
                return false;
            };
            let bmp = self.apply_effect(&bmp, opts.effect, target.dpr());
            for c in &clips {
                target.draw_bitmap(&bmp, dev.x, dev.y, Some(*c), opts.opacity);
            }
            return true;
        }

        self.draw_mode(target, id, dev, mode, opts.mirror, &clips, opts.opacity)
    }

    /// Render `id` over the logical `rect` into a standalone bitmap sized to its device area.
    pub fn render_to_bitmap(
        &mut self,
        id: &str,
        rect: Rect,
        mode: FillMode,
        mirror: bool,
        dpr: f64,
    ) -> Option<Bitmap> {
        let dev = DeviceRect::from_logical(rect, dpr);
        if dev.is_empty() {
            return None;
        }
        if mode == FillMode::Stretch {
            return self.stretched(id, dev, mirror, dpr);
        }
        let mut off = Surface::offscreen(dev, dpr).ok()?;
        if !self.draw_mode(&mut off, id, dev, mode, mirror, &[dev], 1.0) {
            return None;
        }
        off.to_bitmap().ok()
    }

    /// Nine-patch frame rendering of the eight `{base}-{part}` border pieces.
    ///
    /// Returns the number of pieces drawn.
    pub fn render_nine_patch(
        &mut self,
        target: &mut Surface,
        base: &str,
        rect: Rect,
        widths: Insets,
        patch: &NinePatch,
    ) -> usize {
        let r = rect.abs();
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return 0;
        }
        let l = widths.x0.max(0.0).min(r.width());
        let rr = widths.x1.max(0.0).min(r.width() - l);
        let t = widths.y0.max(0.0).min(r.height());
        let b = widths.y1.max(0.0).min(r.height() - t);
        let (x0, x1, y0, y1) = (r.x0, r.x1, r.y0, r.y1);
        let (ix0, ix1, iy0, iy1) = (x0 + l, x1 - rr, y0 + t, y1 - b);

        let g = patch.grouped;
        // A grouped side drops its edge; its corners continue the adjacent edge.
        let pieces: [(&str, Rect, bool, bool); 8] = [
            (
                corner_part("topleft", g.left, "top", g.top, "left"),
                Rect::new(x0, y0, ix0, iy0),
                true,
                g.left && g.top,
            ),
            ("top", Rect::new(ix0, y0, ix1, iy0), true, g.top),
            (
                corner_part("topright", g.right, "top", g.top, "right"),
                Rect::new(ix1, y0, x1, iy0),
                true,
                g.right && g.top,
            ),
            ("left", Rect::new(x0, iy0, ix0, iy1), false, g.left),
            ("right", Rect::new(ix1, iy0, x1, iy1), false, g.right),
            (
                corner_part("bottomleft", g.left, "bottom", g.bottom, "left"),
                Rect::new(x0, iy1, ix0, y1),
                true,
                g.left && g.bottom,
            ),
            ("bottom", Rect::new(ix0, iy1, ix1, y1), true, g.bottom),
            (
                corner_part("bottomright", g.right, "bottom", g.bottom, "right"),
                Rect::new(ix1, iy1, x1, y1),
                true,
                g.right && g.bottom,
            ),
        ];

        let dpr = target.dpr();
        let opts = DrawOpts {
            exclude: patch.exclude,
            ..DrawOpts::default()
        };
        let mut drawn = 0;
        for (i, (part, prect, along_x, skip)) in pieces.into_iter().enumerate() {
            if skip {
                continue;
            }
            let id = format!("{base}-{part}");
            let is_corner = matches!(i, 0 | 2 | 5 | 7);
            let mode = match patch.edges {
                EdgeMode::Tile if !is_corner => self.edge_tile(&id, prect, along_x),
                _ => FillMode::Stretch,
            };
            if self.render_element(target, &id, prect, mode, opts) {
                drawn += 1;
            }
        }
        tracing::trace!(base, drawn, dpr, "nine-patch rendered");
        drawn
    }

    /// Draw `id` at evenly spaced slider values inside the logical slider `rect`.
    ///
    /// Returns the number of ticks drawn.
    pub fn render_slider_ticks(
        &mut self,
        target: &mut Surface,
        id: &str,
        rect: Rect,
        ticks: &SliderTicks,
    ) -> usize {
        let r = rect.abs();
        let span = i64::from(ticks.max) - i64::from(ticks.min);
        if span <= 0 || ticks.length <= 0.0 || !self.elements.has_element(id) {
            return 0;
        }
        let interval = i64::from(ticks.interval.max(1));
        if span / interval > MAX_TICKS {
            return 0;
        }

        let (start, len) = if ticks.horizontal {
            (r.x0, r.width())
        } else {
            (r.y0, r.height())
        };
        let handle = ticks.handle_len.clamp(0.0, len);
        let available = len - handle;
        let origin = start + handle / 2.0;

        let mut drawn = 0;
        let mut v = 0i64;
        while v <= span {
            let frac = v as f64 / span as f64;
            let frac = if ticks.inverted { 1.0 - frac } else { frac };
            let pos = (origin + frac * available).round();
            for &above in anchors(ticks.position) {
                let tick = tick_rect(r, pos, ticks.length, ticks.horizontal, above);
                if self.render_element(target, id, tick, FillMode::Stretch, DrawOpts::default()) {
                    drawn += 1;
                }
            }
            v += interval;
        }
        drawn
    }

    fn stretched(&mut self, id: &str, dev: DeviceRect, mirror: bool, dpr: f64) -> Option<Bitmap> {
        let bmp = self.element_bitmap(id, dev.width, dev.height, dpr)?;
        Some(if mirror {
            self.apply_effect(&bmp, Effect::Mirrored, dpr)
        } else {
            bmp
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_mode(
        &mut self,
        target: &mut Surface,
        id: &str,
        dev: DeviceRect,
        mode: FillMode,
        mirror: bool,
        clips: &[DeviceRect],
        opacity: f32,
    ) -> bool {
        let dpr = target.dpr();
        let (uw, uh) = match mode {
            FillMode::Stretch => (dev.width, dev.height),
            FillMode::Tile { px, py } => (unit(px, dev.width, dpr), unit(py, dev.height, dpr)),
        };
        let unit_rect = DeviceRect {
            width: uw,
            height: uh,
            ..dev
        };
        let Some(tile) = self.stretched(id, unit_rect, mirror, dpr) else {
            return false;
        };

        let mut y = dev.y;
        while y < dev.bottom() {
            let mut x = dev.x;
            while x < dev.right() {
                for c in clips {
                    target.draw_bitmap(&tile, x, y, Some(*c), opacity);
                }
                x += uw as i32;
            }
            y += uh as i32;
        }
        true
    }

    fn edge_tile(&self, id: &str, prect: Rect, along_x: bool) -> FillMode {
        let Some(natural) = self.elements.element_size(id) else {
            return FillMode::Stretch;
        };
        if along_x {
            let thick = prect.height();
            if natural.height <= 0.0 || thick <= 0.0 {
                return FillMode::Stretch;
            }
            let len = (natural.width * thick / natural.height).round().max(1.0) as u32;
            FillMode::Tile { px: len, py: 0 }
        } else {
            let thick = prect.width();
            if natural.width <= 0.0 || thick <= 0.0 {
                return FillMode::Stretch;
            }
            let len = (natural.height * thick / natural.width).round().max(1.0) as u32;
            FillMode::Tile { px: 0, py: len }
        }
    }
}

fn corner_part(
    own: &'static str,
    horizontal_grouped: bool,
    horizontal: &'static str,
    vertical_grouped: bool,
    vertical: &'static str,
) -> &'static str {
    if horizontal_grouped {
        horizontal
    } else if vertical_grouped {
        vertical
    } else {
        own
    }
}

fn unit(pattern: u32, full: u32, dpr: f64) -> u32 {
    if pattern == 0 {
        return full;
    }
    ((f64::from(pattern) * dpr).round() as u32).max(1)
}

fn clip_list(
    dev: DeviceRect,
    clip: Option<DeviceRect>,
    exclude: Option<DeviceRect>,
) -> Vec<DeviceRect> {
    let area = clip.map_or(dev, |c| dev.intersect(c));
    if area.is_empty() {
        return Vec::new();
    }
    match exclude {
        Some(hole) => area.subtract(hole),
        None => vec![area],
    }
}

fn anchors(position: TickPosition) -> &'static [bool] {
    match position {
        TickPosition::Above => &[true],
        TickPosition::Below => &[false],
        TickPosition::Both => &[true, false],
    }
}

fn tick_rect(slider: Rect, pos: f64, length: f64, horizontal: bool, above: bool) -> Rect {
    let length = if horizontal {
        length.min(slider.height())
    } else {
        length.min(slider.width())
    };
    if horizontal {
        let (y0, y1) = if above {
            (slider.y0, slider.y0 + length)
        } else {
            (slider.y1 - length, slider.y1)
        };
        Rect::new(pos, y0, pos + 1.0, y1)
    } else {
        let (x0, x1) = if above {
            (slider.x0, slider.x0 + length)
        } else {
            (slider.x1 - length, slider.x1)
        };
        Rect::new(x0, pos, x1, pos + 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/asset.rs"]
mod tests;
