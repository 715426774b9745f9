use crate::foundation::core::Size;
use crate::render::text::TextShaper;
use crate::spec::model::{IconTextArrangement, LabelSpec};
use crate::spec::resolver::SpecResolver;

/// Inputs of a minimum-size calculation.
#[derive(Clone, Copy, Debug)]
pub struct ContentRequest<'a> {
    /// Widget name used for spec lookup.
    pub widget: &'a str,
    /// Label text; empty for none.
    pub text: &'a str,
    /// Caller icon size; `None` when the widget has no icon.
    pub icon: Option<Size>,
    /// Arrangement override; the label spec's default is used when `None`.
    pub arrangement: Option<IconTextArrangement>,
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Wrap width for multi-line text.
    pub wrap_width: Option<f64>,
}

impl<'a> ContentRequest<'a> {
    /// Text-only request for `widget`.
    pub fn text(widget: &'a str, text: &'a str, font_size: f32) -> Self {
        Self {
            widget,
            text,
            icon: None,
            arrangement: None,
            font_size,
            wrap_width: None,
        }
    }

    /// Same request with an icon of `size`.
    pub fn with_icon(mut self, size: Size) -> Self {
        self.icon = Some(size);
        self
    }

    /// Same request with an explicit arrangement.
    pub fn with_arrangement(mut self, arrangement: IconTextArrangement) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    /// Same request wrapping text at `width`.
    pub fn with_wrap_width(mut self, width: f64) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

/// Effective icon size: the label spec's fixed size when set, else the caller's.
pub fn icon_size(label: &LabelSpec, icon: Option<Size>) -> Size {
    match icon {
        None => Size::ZERO,
        Some(_) if label.icon_size > 0 => {
            let s = f64::from(label.icon_size);
            Size::new(s, s)
        }
        Some(s) => s,
    }
}

/// Logical size of `text` bounded by `wrap_width`.
///
/// The width always comes from the wrapped layout. The height is the measured layout height when
/// `exact_height` is set and `line height * wrapped line count` otherwise.
pub fn text_size(
    shaper: &mut dyn TextShaper,
    text: &str,
    font_size: f32,
    wrap_width: Option<f64>,
    exact_height: bool,
) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let m = shaper.measure(text, font_size, wrap_width);
    if exact_height || m.lines <= 1 {
        return Size::new(m.width.ceil(), m.height.ceil());
    }
    let estimated = shaper.line_height(font_size) * m.lines as f64;
    Size::new(m.width.ceil(), estimated.ceil())
}

/// Combine icon and text extents per `arrangement`, inserting `spacing` when both are present.
pub fn arrange(arrangement: IconTextArrangement, icon: Size, text: Size, spacing: f64) -> Size {
    let has_icon = !icon.is_zero_area();
    let has_text = !text.is_zero_area();
    match arrangement {
        IconTextArrangement::IconOnly => icon,
        IconTextArrangement::TextOnly => text,
        _ if !has_icon => text,
        _ if !has_text => icon,
        a if a.is_horizontal() => Size::new(
            icon.width + spacing + text.width,
            icon.height.max(text.height),
        ),
        _ => Size::new(
            icon.width.max(text.width),
            icon.height + spacing + text.height,
        ),
    }
}

/// Minimum size of a widget's content box.
///
/// Frame border widths plus label margins plus the arranged icon/text extent, clamped below by
/// the widget's size spec.
#[tracing::instrument(skip(resolver, shaper, req), fields(widget = req.widget))]
pub fn content_size(
    resolver: &SpecResolver<'_>,
    shaper: &mut dyn TextShaper,
    req: &ContentRequest<'_>,
    exact_text_height: bool,
) -> Size {
    let frame = resolver.frame(req.widget).insets();
    let label = resolver.label(req.widget);
    let margins = label.margins();
    let arrangement = req.arrangement.unwrap_or(label.arrangement);

    let icon = icon_size(label, req.icon);
    let text = text_size(
        shaper,
        req.text,
        req.font_size,
        req.wrap_width,
        exact_text_height,
    );
    let body = arrange(arrangement, icon, text, f64::from(label.tispace));

    let min = resolver.size(req.widget).as_size();
    let width = body.width + margins.x_value() + frame.x_value();
    let height = body.height + margins.y_value() + frame.y_value();
    Size::new(width.max(min.width).ceil(), height.max(min.height).ceil())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/size.rs"]
mod tests;
