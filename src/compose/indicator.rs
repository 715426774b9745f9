use crate::compose::frame::state_element;
use crate::foundation::core::{Alignment, LayoutDirection, Rect, Size};
use crate::render::asset::{AssetRenderer, DrawOpts, FillMode};
use crate::render::surface::Surface;
use crate::spec::model::IndicatorSpec;
use crate::state::resolver::StateName;

/// Square occupied by the indicator glyph inside `area`.
///
/// The alignment is mirrored for right-to-left layouts; the glyph never exceeds `area`.
pub fn indicator_rect(
    spec: &IndicatorSpec,
    area: Rect,
    align: Alignment,
    dir: LayoutDirection,
) -> Option<Rect> {
    let side = f64::from(spec.size)
        .min(area.width())
        .min(area.height());
    if side <= 0.0 {
        return None;
    }
    Some(align.resolve(dir).place(Size::new(side, side), area))
}

/// Draw the indicator glyph aligned in `area`; flipped horizontally in right-to-left layouts.
pub fn paint_indicator(
    renderer: &mut AssetRenderer<'_>,
    target: &mut Surface,
    spec: &IndicatorSpec,
    state: StateName,
    area: Rect,
    align: Alignment,
    dir: LayoutDirection,
) -> bool {
    let Some(rect) = indicator_rect(spec, area, align, dir) else {
        return false;
    };
    let Some(id) = state_element(renderer, &spec.element, state, "") else {
        return false;
    };
    let opts = DrawOpts {
        mirror: dir.is_rtl(),
        ..DrawOpts::default()
    };
    renderer.render_element(target, &id, rect, FillMode::Stretch, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/indicator.rs"]
mod tests;
