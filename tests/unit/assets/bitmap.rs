use super::*;

#[test]
fn from_premul_rejects_wrong_length() {
    assert!(Bitmap::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::from_premul(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn identity_follows_content() {
    let a = Bitmap::solid(3, 3, Rgba8::opaque(10, 20, 30));
    let b = Bitmap::solid(3, 3, Rgba8::opaque(10, 20, 30));
    let c = Bitmap::solid(3, 3, Rgba8::opaque(10, 20, 31));
    let d = Bitmap::solid(9, 1, Rgba8::opaque(10, 20, 30));
    assert_eq!(a.id(), b.id());
    assert_ne!(a.id(), c.id());
    assert_ne!(a.id(), d.id());
}

#[test]
fn solid_is_premultiplied() {
    let b = Bitmap::solid(1, 1, Rgba8::new(255, 0, 0, 128));
    assert_eq!(b.pixel(0, 0), [128, 0, 0, 128]);
    assert_eq!(b.pixel(5, 5), [0, 0, 0, 0]);
}

#[test]
fn mirrored_flips_rows() {
    let data = vec![
        1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, //
        4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6,
    ];
    let b = Bitmap::from_premul(3, 2, data).unwrap();
    let m = b.mirrored();
    assert_eq!(m.pixel(0, 0), [3, 3, 3, 3]);
    assert_eq!(m.pixel(2, 0), [1, 1, 1, 1]);
    assert_eq!(m.pixel(1, 1), [5, 5, 5, 5]);
    assert_eq!(m.pixel(0, 1), [6, 6, 6, 6]);
    assert_eq!(m.mirrored(), b);
}

#[test]
fn empty_bitmap_is_allowed() {
    let b = Bitmap::from_premul(0, 4, Vec::new()).unwrap();
    assert!(b.is_empty());
    assert!(b.mirrored().is_empty());
}

#[test]
fn resized_keeps_solid_color() {
    let b = Bitmap::solid(4, 4, Rgba8::opaque(0, 128, 255));
    let r = b.resized(8, 2);
    assert_eq!((r.width(), r.height()), (8, 2));
    assert!(r.data().chunks_exact(4).all(|p| p == [0, 128, 255, 255]));
    assert_eq!(b.resized(4, 4), b);
}
