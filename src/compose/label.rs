use crate::assets::bitmap::Bitmap;
use crate::effects::cache::Effect;
use crate::foundation::core::{Alignment, LayoutDirection, Rect, Rgba8, Size};
use crate::foundation::error::SkinResult;
use crate::geometry::size::{icon_size, text_size};
use crate::render::asset::AssetRenderer;
use crate::render::surface::Surface;
use crate::render::text::TextShaper;
use crate::spec::model::{ColorSpec, HacksSpec, IconTextArrangement, LabelSpec};
use crate::state::resolver::{StateName, WidgetState};

/// Semantic palette role that supplies label text color when the label spec has none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Text on window backgrounds.
    WindowText,
    /// Text on views and edits.
    Text,
    /// Text on buttons.
    #[default]
    ButtonText,
    /// Text on highlighted backgrounds.
    HighlightText,
}

impl ColorRole {
    /// Palette color of this role.
    pub fn pick(self, colors: &ColorSpec) -> Rgba8 {
        match self {
            Self::WindowText => colors.window_text_color,
            Self::Text => colors.text_color,
            Self::ButtonText => colors.button_text_color,
            Self::HighlightText => colors.highlight_text_color,
        }
    }
}

/// Label text color for `state`.
///
/// Disabled text always uses the theme's disabled color. Other states take the label spec's
/// per-state color and fall back to `role`.
pub fn text_color(
    label: &LabelSpec,
    colors: &ColorSpec,
    role: ColorRole,
    state: StateName,
) -> Rgba8 {
    let spec = match state {
        StateName::Disabled => return colors.disabled_text_color,
        StateName::Normal => label.normal_color,
        StateName::Focused => label.focus_color,
        StateName::Pressed => label.press_color,
        StateName::Toggled => label.toggle_color,
    };
    spec.unwrap_or_else(|| role.pick(colors))
}

/// Raster effect applied to label icons in `state`.
pub fn icon_effect(hacks: &HacksSpec, colors: &ColorSpec, state: &WidgetState) -> Effect {
    if state.name == StateName::Disabled {
        let pct = hacks.disabled_icon_opacity.min(100);
        return if pct < 100 {
            Effect::Translucent { pct }
        } else {
            Effect::None
        };
    }
    let pct = hacks.tint_on_mouseover.min(100);
    let hot = match state.name {
        StateName::Focused => true,
        StateName::Toggled => state.hovered && !hacks.no_selection_tint,
        _ => false,
    };
    if pct > 0 && hot {
        Effect::Tint {
            color: colors.highlight_color,
            pct,
        }
    } else {
        Effect::None
    }
}

/// Caller-provided label content.
#[derive(Clone, Copy, Debug)]
pub struct LabelContent<'a> {
    /// Text; empty for none.
    pub text: &'a str,
    /// Icon raster at any resolution.
    pub icon: Option<&'a Bitmap>,
    /// Logical icon size; the raster's pixel size is used when `None`.
    pub icon_size: Option<Size>,
    /// Arrangement override.
    pub arrangement: Option<IconTextArrangement>,
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Wrap width for multi-line text.
    pub wrap_width: Option<f64>,
    /// Placement of the icon/text group inside the label rect, mirrored for RTL.
    pub align: Alignment,
    /// Palette role of the text.
    pub role: ColorRole,
}

impl<'a> LabelContent<'a> {
    /// Text-only content.
    pub fn text(text: &'a str, font_size: f32) -> Self {
        Self {
            text,
            icon: None,
            icon_size: None,
            arrangement: None,
            font_size,
            wrap_width: None,
            align: Alignment::CENTER,
            role: ColorRole::default(),
        }
    }

    /// Same content with `icon` shown at the logical `size`.
    pub fn with_icon(mut self, icon: &'a Bitmap, size: Option<Size>) -> Self {
        self.icon = Some(icon);
        self.icon_size = size;
        self
    }

    /// Same content with an explicit arrangement.
    pub fn with_arrangement(mut self, arrangement: IconTextArrangement) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    /// Same content placed by `align` instead of centered.
    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Same content wrapped at `width`.
    pub fn with_wrap_width(mut self, width: f64) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Same content with text drawn in `role`.
    pub fn with_role(mut self, role: ColorRole) -> Self {
        self.role = role;
        self
    }

    fn requested_icon_size(&self) -> Option<Size> {
        let icon = self.icon?;
        Some(self.icon_size.unwrap_or_else(|| {
            Size::new(f64::from(icon.width()), f64::from(icon.height()))
        }))
    }
}

/// Placement of the label parts in logical coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelLayout {
    /// Icon rectangle.
    pub icon: Option<Rect>,
    /// Text rectangle.
    pub text: Option<Rect>,
}

/// What a label paint actually drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelPaint {
    /// The icon was drawn.
    pub icon: bool,
    /// The text was drawn.
    pub text: bool,
}

/// Theme data consulted while painting a label.
#[derive(Clone, Copy, Debug)]
pub struct LabelStyle<'a> {
    /// Widget label spec.
    pub spec: &'a LabelSpec,
    /// Theme palette.
    pub colors: &'a ColorSpec,
    /// Theme hacks.
    pub hacks: &'a HacksSpec,
}

fn clamp_to(size: Size, rect: Rect) -> Size {
    Size::new(size.width.min(rect.width()), size.height.min(rect.height()))
}

/// Place icon and text inside `rect`, which is already inset by the label margins.
pub fn layout_label(
    shaper: &mut dyn TextShaper,
    spec: &LabelSpec,
    content: &LabelContent<'_>,
    rect: Rect,
    dir: LayoutDirection,
    exact_text_height: bool,
) -> LabelLayout {
    let arrangement = content.arrangement.unwrap_or(spec.arrangement);
    let icon = match content.requested_icon_size() {
        Some(s) if arrangement != IconTextArrangement::TextOnly => icon_size(spec, Some(s)),
        _ => Size::ZERO,
    };
    let text = if arrangement == IconTextArrangement::IconOnly {
        Size::ZERO
    } else {
        text_size(
            shaper,
            content.text,
            content.font_size,
            content.wrap_width,
            exact_text_height,
        )
    };
    let icon = clamp_to(icon, rect);
    let text = clamp_to(text, rect);

    let has_icon = !icon.is_zero_area();
    let has_text = !text.is_zero_area();
    let align = content.align.resolve(dir);
    let place = |s: Size| align.place(s, rect);
    match (has_icon, has_text) {
        (false, false) => LabelLayout::default(),
        (true, false) => LabelLayout {
            icon: Some(place(icon)),
            text: None,
        },
        (false, true) => LabelLayout {
            icon: None,
            text: Some(place(text)),
        },
        (true, true) => {
            let spacing = f64::from(spec.tispace);
            if arrangement.is_vertical() {
                let group = place(Size::new(
                    icon.width.max(text.width),
                    (icon.height + spacing + text.height).min(rect.height()),
                ));
                let (icon_y, text_y) = if arrangement == IconTextArrangement::TextUnderIcon {
                    (group.y0, group.y1 - text.height)
                } else {
                    (group.y1 - icon.height, group.y0)
                };
                LabelLayout {
                    icon: Some(stack(group, icon, icon_y)),
                    text: Some(stack(group, text, text_y)),
                }
            } else {
                let group = place(Size::new(
                    (icon.width + spacing + text.width).min(rect.width()),
                    icon.height.max(text.height),
                ));
                let icon_leads =
                    (arrangement != IconTextArrangement::TextBeforeIcon) != dir.is_rtl();
                let (icon_x, text_x) = if icon_leads {
                    (group.x0, group.x1 - text.width)
                } else {
                    (group.x1 - icon.width, group.x0)
                };
                LabelLayout {
                    icon: Some(beside(group, icon, icon_x)),
                    text: Some(beside(group, text, text_x)),
                }
            }
        }
    }
}

fn stack(group: Rect, size: Size, y: f64) -> Rect {
    let x = (group.x0 + (group.width() - size.width) / 2.0).round();
    Rect::from_origin_size((x, y.round()), size)
}

fn beside(group: Rect, size: Size, x: f64) -> Rect {
    let y = (group.y0 + (group.height() - size.height) / 2.0).round();
    Rect::from_origin_size((x.round(), y), size)
}

/// Draw the label's icon and text inside `rect`.
///
/// The text shadow, when the label has one, is drawn first and skipped for disabled widgets.
#[allow(clippy::too_many_arguments)]
pub fn paint_label(
    renderer: &mut AssetRenderer<'_>,
    shaper: &mut dyn TextShaper,
    target: &mut Surface,
    style: &LabelStyle<'_>,
    state: &WidgetState,
    content: &LabelContent<'_>,
    rect: Rect,
    dir: LayoutDirection,
    exact_text_height: bool,
) -> SkinResult<LabelPaint> {
    let layout = layout_label(shaper, style.spec, content, rect, dir, exact_text_height);
    let clip = target.device_rect(rect);
    let dpr = target.dpr();
    let mut painted = LabelPaint::default();

    if let (Some(r), Some(icon)) = (layout.icon, content.icon) {
        let dev = target.device_rect(r);
        if !dev.is_empty() {
            let scaled = renderer.scaled_bitmap(icon, dev.width, dev.height, dpr);
            let effect = icon_effect(style.hacks, style.colors, state);
            let shown = renderer.apply_effect(&scaled, effect, dpr);
            target.draw_bitmap(&shown, dev.x, dev.y, Some(clip), 1.0);
            painted.icon = true;
        }
    }

    if let Some(r) = layout.text {
        let dev = target.device_rect(r);
        if let Some(shadow) = style.spec.shadow.filter(|_| state.name != StateName::Disabled) {
            if let Some(bmp) = shaper.rasterize(
                content.text,
                content.font_size,
                content.wrap_width,
                shadow.color,
                dpr,
            )? {
                let dx = (f64::from(shadow.x_shift) * dpr).round() as i32;
                let dy = (f64::from(shadow.y_shift) * dpr).round() as i32;
                target.draw_bitmap(&bmp, dev.x + dx, dev.y + dy, Some(clip), 1.0);
            }
        }
        let color = text_color(style.spec, style.colors, content.role, state.name);
        if let Some(bmp) = shaper.rasterize(
            content.text,
            content.font_size,
            content.wrap_width,
            color,
            dpr,
        )? {
            target.draw_bitmap(&bmp, dev.x, dev.y, Some(clip), 1.0);
            painted.text = true;
        }
    }
    Ok(painted)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/label.rs"]
mod tests;
