use super::*;
use crate::foundation::core::Rgba8;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

#[test]
fn new_rejects_bad_dpr_and_huge_sizes() {
    assert!(Surface::new(4, 4, 0.0).is_err());
    assert!(Surface::new(4, 4, f64::NAN).is_err());
    assert!(Surface::new(20_000, 4, 1.0).is_err());
    let s = Surface::new(4, 3, 2.0).unwrap();
    assert_eq!(s.data().len(), 4 * 3 * 4);
}

#[test]
fn draw_bitmap_clips_to_surface() {
    let mut s = Surface::new(4, 4, 1.0).unwrap();
    let b = Bitmap::solid(3, 3, Rgba8::opaque(255, 0, 0));
    s.draw_bitmap(&b, 2, -1, None, 1.0);
    assert_eq!(s.pixel(2, 0), RED);
    assert_eq!(s.pixel(3, 1), RED);
    assert_eq!(s.pixel(1, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(2, 2), [0, 0, 0, 0]);
}

#[test]
fn draw_bitmap_honors_clip() {
    let mut s = Surface::new(4, 1, 1.0).unwrap();
    let b = Bitmap::solid(4, 1, Rgba8::opaque(255, 0, 0));
    s.draw_bitmap(&b, 0, 0, Some(DeviceRect::from_edges(1, 0, 3, 1)), 1.0);
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(1, 0), RED);
    assert_eq!(s.pixel(2, 0), RED);
    assert_eq!(s.pixel(3, 0), [0, 0, 0, 0]);
}

#[test]
fn offscreen_uses_absolute_coordinates() {
    let rect = DeviceRect::from_edges(10, 10, 12, 12);
    let mut off = Surface::offscreen(rect, 1.0).unwrap();
    off.draw_bitmap(&Bitmap::solid(1, 1, Rgba8::opaque(0, 0, 255)), 11, 11, None, 1.0);
    assert_eq!(off.pixel(11, 11), BLUE);
    assert_eq!(off.pixel(0, 0), [0, 0, 0, 0]);

    let mut win = Surface::new(16, 16, 1.0).unwrap();
    win.draw_surface(&off, 1.0).unwrap();
    assert_eq!(win.pixel(11, 11), BLUE);
    assert_eq!(win.pixel(10, 10), [0, 0, 0, 0]);
}

#[test]
fn crossfade_endpoints_pick_one_source() {
    let rect = DeviceRect::from_edges(0, 0, 2, 2);
    let mut a = Surface::offscreen(rect, 1.0).unwrap();
    let mut b = Surface::offscreen(rect, 1.0).unwrap();
    a.draw_bitmap(&Bitmap::solid(2, 2, Rgba8::opaque(255, 0, 0)), 0, 0, None, 1.0);
    b.draw_bitmap(&Bitmap::solid(2, 2, Rgba8::opaque(0, 0, 255)), 0, 0, None, 1.0);

    let mut win = Surface::new(2, 2, 1.0).unwrap();
    win.draw_crossfade(&a, &b, 0.0).unwrap();
    assert_eq!(win.pixel(1, 1), RED);

    let mut win = Surface::new(2, 2, 1.0).unwrap();
    win.draw_crossfade(&a, &b, 1.0).unwrap();
    assert_eq!(win.pixel(1, 1), BLUE);

    let other = Surface::offscreen(DeviceRect::from_edges(0, 0, 3, 2), 1.0).unwrap();
    assert!(win.draw_crossfade(&a, &other, 0.5).is_err());
}
