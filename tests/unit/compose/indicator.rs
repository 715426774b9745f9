use super::*;
use crate::assets::elements::SvgElements;
use crate::effects::cache::PixmapCache;
use crate::foundation::core::{HAlign, VAlign};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn library() -> SvgElements {
    SvgElements::from_svg_str(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">
<g id="check-normal"><rect x="0" y="0" width="2" height="4" fill="#ff0000"/><rect x="2" y="0" width="2" height="4" fill="#0000ff"/></g>
</svg>"##,
    )
    .unwrap()
}

fn spec(size: u32) -> IndicatorSpec {
    IndicatorSpec {
        element: "check".to_string(),
        size,
    }
}

const LEADING: Alignment = Alignment::new(HAlign::Left, VAlign::Center);

#[test]
fn indicator_rect_is_clamped_to_area() {
    let area = Rect::new(0.0, 0.0, 10.0, 6.0);
    let r = indicator_rect(&spec(20), area, LEADING, LayoutDirection::LeftToRight).unwrap();
    assert_eq!(r, Rect::new(0.0, 0.0, 6.0, 6.0));
    assert!(indicator_rect(&spec(0), area, LEADING, LayoutDirection::LeftToRight).is_none());
}

#[test]
fn indicator_alignment_mirrors_in_rtl() {
    let area = Rect::new(0.0, 0.0, 10.0, 4.0);
    let ltr = indicator_rect(&spec(4), area, LEADING, LayoutDirection::LeftToRight).unwrap();
    let rtl = indicator_rect(&spec(4), area, LEADING, LayoutDirection::RightToLeft).unwrap();
    assert_eq!(ltr, Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(rtl, Rect::new(6.0, 0.0, 10.0, 4.0));
}

#[test]
fn glyph_is_flipped_when_painted_right_to_left() {
    let el = library();
    let mut cache = PixmapCache::new(1 << 20);
    let mut r = AssetRenderer::new(&el, &mut cache, 0);
    let area = Rect::new(0.0, 0.0, 10.0, 4.0);

    let mut ltr = Surface::new(10, 4, 1.0).unwrap();
    assert!(paint_indicator(
        &mut r,
        &mut ltr,
        &spec(4),
        StateName::Focused,
        area,
        LEADING,
        LayoutDirection::LeftToRight
    ));
    assert_eq!(ltr.pixel(0, 1), RED);
    assert_eq!(ltr.pixel(3, 1), BLUE);
    assert_eq!(ltr.pixel(8, 1), CLEAR);

    let mut rtl = Surface::new(10, 4, 1.0).unwrap();
    assert!(paint_indicator(
        &mut r,
        &mut rtl,
        &spec(4),
        StateName::Normal,
        area,
        LEADING,
        LayoutDirection::RightToLeft
    ));
    assert_eq!(rtl.pixel(6, 1), BLUE);
    assert_eq!(rtl.pixel(9, 1), RED);
    assert_eq!(rtl.pixel(1, 1), CLEAR);
}

#[test]
fn missing_glyph_paints_nothing() {
    let el = library();
    let mut cache = PixmapCache::new(1 << 20);
    let mut r = AssetRenderer::new(&el, &mut cache, 0);
    let mut s = Surface::new(10, 4, 1.0).unwrap();
    let absent = IndicatorSpec {
        element: "radio".to_string(),
        size: 4,
    };
    assert!(!paint_indicator(
        &mut r,
        &mut s,
        &absent,
        StateName::Normal,
        Rect::new(0.0, 0.0, 10.0, 4.0),
        Alignment::CENTER,
        LayoutDirection::LeftToRight
    ));
}
