use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_icon_png_is_premultiplied() {
    let bmp = decode_icon(&png_bytes(1, 1, vec![100, 50, 200, 128])).unwrap();
    assert_eq!((bmp.width(), bmp.height()), (1, 1));
    assert_eq!(
        bmp.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_icon_clears_color_of_transparent_pixels() {
    let bmp = decode_icon(&png_bytes(2, 1, vec![9, 9, 9, 0, 255, 0, 0, 255])).unwrap();
    assert_eq!(bmp.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(bmp.pixel(1, 0), [255, 0, 0, 255]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_icon(b"not an image").is_err());
}

#[test]
fn parse_svg_ok_and_err() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    parse_svg(ok).unwrap();
    assert!(parse_svg(br#"<svg"#).is_err());
}
