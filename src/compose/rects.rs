use crate::foundation::core::{Insets, Rect, shrink_rect};
use crate::spec::model::{FrameSpec, LabelSpec};

/// Edge of a tab frame that a tab attaches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabPosition {
    /// Tabs above the frame.
    #[default]
    Top,
    /// Tabs below the frame.
    Bottom,
    /// Tabs left of the frame.
    Left,
    /// Tabs right of the frame.
    Right,
}

/// Gap left in a frame edge where the selected tab joins it.
///
/// Along the `position` edge, the span `[distance + f1, distance + length - f2]` measured from
/// the frame's leading corner stays unpainted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TabGap {
    /// Attached edge.
    pub position: TabPosition,
    /// Offset of the tab from the frame's leading corner.
    pub distance: f64,
    /// Tab length along the edge.
    pub length: f64,
    /// Leading tab-frame width kept painted.
    pub f1: f64,
    /// Trailing tab-frame width kept painted.
    pub f2: f64,
}

/// Border widths actually drawn for `bounds`, with outward expansion applied.
///
/// An expanded frame grows every side to `min(expansion, shorter side / 2)` when that is larger
/// than the authored width.
pub fn frame_insets(spec: &FrameSpec, bounds: Rect) -> Insets {
    let base = spec.insets();
    if !spec.has_frame || spec.expansion == 0 {
        return base;
    }
    let half = (bounds.width().min(bounds.height()) / 2.0).floor().max(0.0);
    let e = f64::from(spec.expansion).min(half);
    Insets::new(base.x0.max(e), base.y0.max(e), base.x1.max(e), base.y1.max(e))
}

/// Area inside the frame border.
pub fn interior_rect(bounds: Rect, frame: Insets) -> Rect {
    shrink_rect(bounds, frame)
}

/// Area left for icon and text: the interior inset by the label margins.
pub fn label_rect(interior: Rect, label: &LabelSpec) -> Rect {
    shrink_rect(interior, label.margins())
}

/// Logical rectangle of the tab gap on the frame edge, clamped to the edge strip.
pub fn tab_gap_rect(bounds: Rect, frame: Insets, gap: &TabGap) -> Option<Rect> {
    let b = bounds.abs();
    let start = gap.distance + gap.f1.max(0.0);
    let end = gap.distance + gap.length - gap.f2.max(0.0);
    if end <= start {
        return None;
    }
    let r = match gap.position {
        TabPosition::Top => Rect::new(b.x0 + start, b.y0, b.x0 + end, b.y0 + frame.y0),
        TabPosition::Bottom => Rect::new(b.x0 + start, b.y1 - frame.y1, b.x0 + end, b.y1),
        TabPosition::Left => Rect::new(b.x0, b.y0 + start, b.x0 + frame.x0, b.y0 + end),
        TabPosition::Right => Rect::new(b.x1 - frame.x1, b.y0 + start, b.x1, b.y0 + end),
    };
    let r = r.intersect(b);
    (r.width() > 0.0 && r.height() > 0.0).then_some(r)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/rects.rs"]
mod tests;
