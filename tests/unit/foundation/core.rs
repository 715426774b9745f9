use super::*;

#[test]
fn shrink_rect_subtracts_each_side() {
    let r = shrink_rect(
        Rect::new(0.0, 0.0, 100.0, 40.0),
        Insets::new(3.0, 2.0, 5.0, 4.0),
    );
    assert_eq!(r, Rect::new(3.0, 2.0, 95.0, 36.0));
}

#[test]
fn shrink_rect_clamps_to_zero_instead_of_inverting() {
    let r = shrink_rect(
        Rect::new(10.0, 10.0, 14.0, 12.0),
        Insets::uniform(8.0),
    );
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
    assert!(r.x0 >= 10.0 && r.x1 <= 14.0);
}

#[test]
fn rtl_swaps_left_and_right_only() {
    let a = Alignment::new(HAlign::Left, VAlign::Top);
    assert_eq!(
        a.resolve(LayoutDirection::RightToLeft),
        Alignment::new(HAlign::Right, VAlign::Top)
    );
    assert_eq!(a.resolve(LayoutDirection::LeftToRight), a);
    assert_eq!(
        Alignment::CENTER.resolve(LayoutDirection::RightToLeft),
        Alignment::CENTER
    );
}

#[test]
fn squared_rect_is_centered() {
    let sq = squared_rect(Rect::new(0.0, 0.0, 30.0, 10.0));
    assert_eq!(sq, Rect::new(10.0, 0.0, 20.0, 10.0));
}

#[test]
fn device_rect_scales_and_rounds_edges() {
    let d = DeviceRect::from_logical(Rect::new(1.0, 1.0, 11.0, 6.0), 1.5);
    assert_eq!(d.x, 2);
    assert_eq!(d.y, 2);
    assert_eq!(d.width, 15);
    assert_eq!(d.height, 7);
    assert!(DeviceRect::from_logical(Rect::new(0.0, 0.0, 0.0, 5.0), 2.0).is_empty());
}

#[test]
fn premul_scales_color_by_alpha() {
    assert_eq!(Rgba8::new(255, 128, 0, 128).to_premul(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::opaque(1, 2, 3).to_premul(), [1, 2, 3, 255]);
}

#[test]
fn color_round_trips_through_json_array() {
    let c: Rgba8 = serde_json::from_str("[10, 20, 30, 40]").unwrap();
    assert_eq!(c, Rgba8::new(10, 20, 30, 40));
}

#[test]
fn device_rect_intersection_and_subtraction() {
    let a = DeviceRect::from_edges(0, 0, 10, 10);
    let b = DeviceRect::from_edges(5, -5, 20, 3);
    assert_eq!(a.intersect(b), DeviceRect::from_edges(5, 0, 10, 3));
    assert!(a.intersect(DeviceRect::from_edges(20, 20, 30, 30)).is_empty());

    let hole = DeviceRect::from_edges(3, 0, 6, 2);
    let parts = a.subtract(hole);
    let area: u32 = parts.iter().map(|r| r.width * r.height).sum();
    assert_eq!(area, 100 - 6);
    assert!(parts.iter().all(|r| r.intersect(hole).is_empty()));

    assert_eq!(a.subtract(DeviceRect::from_edges(50, 50, 60, 60)), vec![a]);
    assert!(a.subtract(a).is_empty());
}
