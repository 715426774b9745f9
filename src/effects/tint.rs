use crate::assets::bitmap::Bitmap;
use crate::foundation::core::Rgba8;
use crate::foundation::math::{mul_div255_u16, mul_div255_u8, percent_to_u8};

/// Blend every pixel toward `color` by `pct` percent (0-100), keeping the original alpha.
///
/// `0` returns the input unchanged; `100` replaces all color with `color` under the source
/// coverage.
pub fn tint(src: &Bitmap, color: Rgba8, pct: u8) -> Bitmap {
    let w = percent_to_u8(pct);
    if w == 0 {
        return src.clone();
    }
    let iw = 255 - w;
    let tint_rgb = [color.r, color.g, color.b];
    src.map_pixels(|px| {
        let a = u16::from(px[3]);
        let mut out = [0u8, 0, 0, px[3]];
        for i in 0..3 {
            let target = mul_div255_u16(u16::from(tint_rgb[i]), a);
            let mixed = mul_div255_u16(u16::from(px[i]), iw) + mul_div255_u16(target, w);
            out[i] = mixed.min(u16::from(px[3])) as u8;
        }
        out
    })
}

/// Scale per-pixel alpha (and the premultiplied color with it) to `pct` percent (0-100).
pub fn translucent(src: &Bitmap, pct: u8) -> Bitmap {
    let w = percent_to_u8(pct);
    if w == 255 {
        return src.clone();
    }
    src.map_pixels(|px| {
        [
            mul_div255_u8(u16::from(px[0]), w),
            mul_div255_u8(u16::from(px[1]), w),
            mul_div255_u8(u16::from(px[2]), w),
            mul_div255_u8(u16::from(px[3]), w),
        ]
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tint.rs"]
mod tests;
