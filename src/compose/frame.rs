use crate::compose::rects::{TabGap, frame_insets, tab_gap_rect};
use crate::foundation::core::Rect;
use crate::render::asset::{AssetRenderer, DrawOpts, EdgeMode, FillMode, GroupSides, NinePatch};
use crate::render::surface::Surface;
use crate::spec::model::{FrameSpec, InteriorSpec};
use crate::state::resolver::StateName;

/// Per-paint frame switches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOpts {
    /// Draw the border at all.
    pub draw_border: bool,
    /// Sides abutting grouped siblings; only honored for groupable frames.
    pub grouped: GroupSides,
    /// Gap for an attached tab.
    pub tab_gap: Option<TabGap>,
    /// Repeat edge pieces instead of stretching them.
    pub tile_edges: bool,
}

impl Default for FrameOpts {
    fn default() -> Self {
        Self {
            draw_border: true,
            grouped: GroupSides::NONE,
            tab_gap: None,
            tile_edges: false,
        }
    }
}

/// Resolve `{element}-{state}` by checking for `{base}{suffix}`, falling back to the normal
/// state and then to the bare element name.
pub(crate) fn state_element(
    renderer: &AssetRenderer<'_>,
    element: &str,
    state: StateName,
    suffix: &str,
) -> Option<String> {
    if element.is_empty() {
        return None;
    }
    [
        format!("{element}-{}", state.as_str()),
        format!("{element}-{}", StateName::Normal.as_str()),
        element.to_string(),
    ]
    .into_iter()
    .find(|base| renderer.has_element(&format!("{base}{suffix}")))
}

/// Draw the border ring of `bounds`. Returns `true` when any piece was drawn.
pub fn paint_frame(
    renderer: &mut AssetRenderer<'_>,
    target: &mut Surface,
    spec: &FrameSpec,
    state: StateName,
    bounds: Rect,
    opts: &FrameOpts,
) -> bool {
    if !spec.has_frame || !opts.draw_border {
        return false;
    }
    let Some(base) = state_element(renderer, &spec.element, state, "-top") else {
        return false;
    };
    let insets = frame_insets(spec, bounds);
    let exclude = opts
        .tab_gap
        .and_then(|gap| tab_gap_rect(bounds, insets, &gap))
        .map(|r| target.device_rect(r));
    let patch = NinePatch {
        edges: if opts.tile_edges {
            EdgeMode::Tile
        } else {
            EdgeMode::Stretch
        },
        grouped: effective_grouping(spec, opts),
        exclude,
    };
    renderer.render_nine_patch(target, &base, bounds, insets, &patch) > 0
}

/// Grouped sides honored by `spec`; non-groupable frames ignore `opts.grouped`.
pub fn effective_grouping(spec: &FrameSpec, opts: &FrameOpts) -> GroupSides {
    if spec.groupable {
        opts.grouped
    } else {
        GroupSides::NONE
    }
}

/// `interior` pushed out to the `bounds` edge on every grouped side.
pub fn grouped_interior(interior: Rect, bounds: Rect, grouped: GroupSides) -> Rect {
    let b = bounds.abs();
    Rect::new(
        if grouped.left { b.x0 } else { interior.x0 },
        if grouped.top { b.y0 } else { interior.y0 },
        if grouped.right { b.x1 } else { interior.x1 },
        if grouped.bottom { b.y1 } else { interior.y1 },
    )
}

/// Fill `rect` with the interior element, tiled per its pattern sizes.
pub fn paint_interior(
    renderer: &mut AssetRenderer<'_>,
    target: &mut Surface,
    spec: &InteriorSpec,
    state: StateName,
    rect: Rect,
) -> bool {
    if !spec.has_interior {
        return false;
    }
    let Some(id) = state_element(renderer, &spec.element, state, "") else {
        return false;
    };
    renderer.render_element(
        target,
        &id,
        rect,
        FillMode::from_pattern(spec.px, spec.py),
        DrawOpts::default(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;
