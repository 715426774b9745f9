use crate::compose::frame::{
    FrameOpts, effective_grouping, grouped_interior, paint_frame, paint_interior,
};
use crate::compose::indicator::paint_indicator;
use crate::compose::label::{LabelContent, LabelStyle, paint_label};
use crate::compose::rects::{frame_insets, interior_rect, label_rect};
use crate::foundation::core::{Alignment, LayoutDirection, Rect};
use crate::foundation::error::SkinResult;
use crate::render::asset::AssetRenderer;
use crate::render::surface::Surface;
use crate::render::text::TextShaper;
use crate::spec::model::ColorSpec;
use crate::spec::resolver::SpecResolver;
use crate::state::resolver::{StateName, WidgetState};

/// One layer of a widget visual, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Border ring.
    Frame,
    /// Fill inside the border.
    Interior,
    /// Small glyph such as a check mark or arrow.
    Indicator,
    /// Icon and text.
    Label,
}

/// Whether a transition moves into an active state or back to normal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FadeDirection {
    /// The new state fades in over the old one.
    #[default]
    In,
    /// The old state fades out over the new one.
    Out,
}

/// An in-flight state transition to blend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State the widget leaves.
    pub from: StateName,
    /// Blend progress in `[0, 100]`.
    pub opacity: u8,
    /// Fade direction.
    pub direction: FadeDirection,
}

impl Transition {
    fn t(&self) -> f32 {
        f32::from(self.opacity.min(100)) / 100.0
    }
}

/// Indicator glyph to draw alongside the label.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorRequest<'a> {
    /// Widget name of the indicator spec.
    pub widget: &'a str,
    /// Placement inside the area.
    pub align: Alignment,
    /// Area override; the interior rect when `None`.
    pub area: Option<Rect>,
}

/// Everything one widget paint needs besides the theme.
#[derive(Clone, Copy, Debug)]
pub struct WidgetPaint<'a> {
    /// Widget name used for spec lookup.
    pub widget: &'a str,
    /// Resolved state.
    pub state: WidgetState,
    /// Logical widget bounds.
    pub bounds: Rect,
    /// Frame switches.
    pub frame: FrameOpts,
    /// Layout direction.
    pub dir: LayoutDirection,
    /// Optional indicator glyph.
    pub indicator: Option<IndicatorRequest<'a>>,
    /// Optional label content.
    pub label: Option<LabelContent<'a>>,
    /// Palette overriding the theme colors for label text and icon tinting.
    pub palette: Option<&'a ColorSpec>,
    /// Blend from a previous state.
    pub transition: Option<Transition>,
    /// Measure multi-line text exactly instead of estimating.
    pub exact_text_height: bool,
}

impl<'a> WidgetPaint<'a> {
    /// Frame and interior only, left to right.
    pub fn new(widget: &'a str, state: WidgetState, bounds: Rect) -> Self {
        Self {
            widget,
            state,
            bounds,
            frame: FrameOpts::default(),
            dir: LayoutDirection::default(),
            indicator: None,
            label: None,
            palette: None,
            transition: None,
            exact_text_height: false,
        }
    }

    /// Same paint with `label`.
    pub fn with_label(mut self, label: LabelContent<'a>) -> Self {
        self.label = Some(label);
        self
    }

    /// Same paint with an indicator glyph.
    pub fn with_indicator(mut self, indicator: IndicatorRequest<'a>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    /// Same paint with frame switches.
    pub fn with_frame(mut self, frame: FrameOpts) -> Self {
        self.frame = frame;
        self
    }

    /// Same paint in `dir`.
    pub fn with_direction(mut self, dir: LayoutDirection) -> Self {
        self.dir = dir;
        self
    }

    /// Same paint blended from a previous state.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Outcome of one widget paint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintReport {
    /// Layers that drew anything, in paint order.
    pub layers: Vec<Layer>,
    /// State the widget was painted in.
    pub state: StateName,
    /// Blend factor used when the frame and interior were crossfaded.
    pub crossfade: Option<f32>,
}

impl PaintReport {
    /// Return `true` when `layer` drew anything.
    pub fn has(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }
}

fn paint_base(
    resolver: &SpecResolver<'_>,
    renderer: &mut AssetRenderer<'_>,
    target: &mut Surface,
    req: &WidgetPaint<'_>,
    state: StateName,
    interior: Rect,
) -> (bool, bool) {
    let spec = resolver.frame(req.widget);
    let frame = paint_frame(renderer, target, spec, state, req.bounds, &req.frame);
    let fill_rect = grouped_interior(interior, req.bounds, effective_grouping(spec, &req.frame));
    let fill = paint_interior(renderer, target, resolver.interior(req.widget), state, fill_rect);
    (frame, fill)
}

/// Paint one widget: frame, interior, then indicator and label.
///
/// While `req.transition` is set, frame and interior are rendered for both states offscreen and
/// crossfaded; indicator and label always use the current state.
#[tracing::instrument(skip_all, fields(widget = req.widget, state = %req.state.name))]
pub fn paint_widget(
    resolver: &SpecResolver<'_>,
    renderer: &mut AssetRenderer<'_>,
    shaper: &mut dyn TextShaper,
    target: &mut Surface,
    req: &WidgetPaint<'_>,
) -> SkinResult<PaintReport> {
    let mut report = PaintReport {
        state: req.state.name,
        ..PaintReport::default()
    };
    let bounds = req.bounds.abs();
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Ok(report);
    }
    let interior = interior_rect(bounds, frame_insets(resolver.frame(req.widget), bounds));
    let area = target.device_rect(bounds).intersect(target.bounds());

    let fade = req
        .transition
        .filter(|tr| tr.from != req.state.name && tr.opacity < 100 && !area.is_empty());
    let (frame, fill) = match fade {
        Some(tr) => {
            let dpr = target.dpr();
            let mut from = Surface::offscreen(area, dpr)?;
            let mut to = Surface::offscreen(area, dpr)?;
            let a = paint_base(resolver, renderer, &mut from, req, tr.from, interior);
            let b = paint_base(resolver, renderer, &mut to, req, req.state.name, interior);
            let t = tr.t();
            match tr.direction {
                FadeDirection::In => target.draw_crossfade(&from, &to, t)?,
                FadeDirection::Out => {
                    target.draw_surface(&to, 1.0)?;
                    target.draw_surface(&from, 1.0 - t)?;
                }
            }
            report.crossfade = Some(t);
            (a.0 || b.0, a.1 || b.1)
        }
        None => paint_base(resolver, renderer, target, req, req.state.name, interior),
    };
    if frame {
        report.layers.push(Layer::Frame);
    }
    if fill {
        report.layers.push(Layer::Interior);
    }

    if let Some(ind) = req.indicator {
        let spec = resolver.indicator(ind.widget);
        let area = ind.area.unwrap_or(interior);
        if paint_indicator(renderer, target, spec, req.state.name, area, ind.align, req.dir) {
            report.layers.push(Layer::Indicator);
        }
    }

    if let Some(content) = &req.label {
        let spec = resolver.label(req.widget);
        let style = LabelStyle {
            spec,
            colors: req.palette.unwrap_or(resolver.colors()),
            hacks: resolver.hacks(),
        };
        let painted = paint_label(
            renderer,
            shaper,
            target,
            &style,
            &req.state,
            content,
            label_rect(interior, spec),
            req.dir,
            req.exact_text_height,
        )?;
        if painted.icon || painted.text {
            report.layers.push(Layer::Label);
        }
    }

    tracing::trace!(layers = report.layers.len(), "widget painted");
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
