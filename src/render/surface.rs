use crate::assets::bitmap::Bitmap;
use crate::effects::composite::{crossfade_over_in_place, over};
use crate::foundation::core::{DeviceRect, Rect};
use crate::foundation::error::{SkinError, SkinResult};

const MAX_DIM: u32 = 16_384;

/// Premultiplied RGBA8 paint target.
///
/// A surface covers the device-pixel rectangle starting at its origin; logical coordinates are
/// mapped through the device pixel ratio, then shifted by the origin. Window surfaces have origin
/// `(0, 0)`; offscreen surfaces used for crossfades sit at the painted widget's device rect.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    dpr: f64,
    origin_x: i32,
    origin_y: i32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface of `width`x`height` device pixels.
    pub fn new(width: u32, height: u32, dpr: f64) -> SkinResult<Self> {
        Self::offscreen(
            DeviceRect {
                x: 0,
                y: 0,
                width,
                height,
            },
            dpr,
        )
    }

    /// Allocate a transparent surface covering `rect` in device pixels.
    pub fn offscreen(rect: DeviceRect, dpr: f64) -> SkinResult<Self> {
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(SkinError::validation(format!(
                "device pixel ratio must be finite and > 0, got {dpr}"
            )));
        }
        if rect.width > MAX_DIM || rect.height > MAX_DIM {
            return Err(SkinError::render(format!(
                "surface size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
                rect.width, rect.height
            )));
        }
        Ok(Self {
            width: rect.width,
            height: rect.height,
            dpr,
            origin_x: rect.x,
            origin_y: rect.y,
            data: vec![0; rect.width as usize * rect.height as usize * 4],
        })
    }

    /// Width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixel ratio.
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Area covered by the surface, in device pixels.
    pub fn bounds(&self) -> DeviceRect {
        DeviceRect {
            x: self.origin_x,
            y: self.origin_y,
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Map a logical rectangle to (absolute) device pixels.
    pub fn device_rect(&self, logical: Rect) -> DeviceRect {
        DeviceRect::from_logical(logical, self.dpr)
    }

    /// Premultiplied pixel at absolute device coordinates; transparent outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        let (lx, ly) = (x - self.origin_x, y - self.origin_y);
        if lx < 0 || ly < 0 || lx >= self.width as i32 || ly >= self.height as i32 {
            return [0, 0, 0, 0];
        }
        let i = (ly as usize * self.width as usize + lx as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copy the pixels out as a [`Bitmap`].
    pub fn to_bitmap(&self) -> SkinResult<Bitmap> {
        Bitmap::from_premul(self.width, self.height, self.data.clone())
    }

    /// Composite `bitmap` with its top-left corner at absolute device `(x, y)`.
    ///
    /// Only pixels inside `clip` (when given) and inside the surface are touched.
    pub fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        x: i32,
        y: i32,
        clip: Option<DeviceRect>,
        opacity: f32,
    ) {
        let placed = DeviceRect {
            x,
            y,
            width: bitmap.width(),
            height: bitmap.height(),
        };
        let mut area = placed.intersect(self.bounds());
        if let Some(c) = clip {
            area = area.intersect(c);
        }
        if area.is_empty() || opacity <= 0.0 {
            return;
        }

        let src = bitmap.data();
        let bw = bitmap.width() as usize;
        let sw = self.width as usize;
        for row in area.y..area.bottom() {
            let sy = (row - y) as usize;
            let dy = (row - self.origin_y) as usize;
            for col in area.x..area.right() {
                let sx = (col - x) as usize;
                let dx = (col - self.origin_x) as usize;
                let si = (sy * bw + sx) * 4;
                let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
                if s[3] == 0 {
                    continue;
                }
                let di = (dy * sw + dx) * 4;
                let d = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                self.data[di..di + 4].copy_from_slice(&over(d, s, opacity));
            }
        }
    }

    /// Composite another surface over this one at its own origin.
    pub fn draw_surface(&mut self, src: &Surface, opacity: f32) -> SkinResult<()> {
        let bmp = src.to_bitmap()?;
        self.draw_bitmap(&bmp, src.origin_x, src.origin_y, None, opacity);
        Ok(())
    }

    /// Crossfade `from` into `to` by `t` and composite the blend over this surface.
    ///
    /// Both sources must cover the same device rectangle.
    pub fn draw_crossfade(&mut self, from: &Surface, to: &Surface, t: f32) -> SkinResult<()> {
        if from.bounds() != to.bounds() {
            return Err(SkinError::render(
                "crossfade sources must cover the same area",
            ));
        }
        let mut blended = Surface::offscreen(from.bounds(), self.dpr)?;
        crossfade_over_in_place(&mut blended.data, &from.data, &to.data, t)?;
        self.draw_surface(&blended, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
