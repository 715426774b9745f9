use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{SkinError, SkinResult};
use crate::foundation::math::Fnv1a64;

/// Content-derived identity of a [`Bitmap`], used as the source half of effect cache keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapId(pub(crate) u64);

impl BitmapId {
    /// Access the raw 64-bit identity.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Immutable premultiplied RGBA8 raster, row-major and tightly packed.
///
/// Pixel storage is shared, so clones are cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Arc<Vec<u8>>,
    id: BitmapId,
}

impl Bitmap {
    /// Wrap premultiplied RGBA8 bytes, validating the buffer length.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> SkinResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| SkinError::validation("bitmap size overflow"))?;
        if data.len() != expected {
            return Err(SkinError::validation(format!(
                "bitmap expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self::from_parts(width, height, data))
    }

    // Callers guarantee `data.len() == width * height * 4`.
    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        let mut h = Fnv1a64::for_raster(width, height);
        h.write_bytes(&data);
        Self {
            width,
            height,
            data: Arc::new(data),
            id: BitmapId(h.finish()),
        }
    }

    /// A bitmap filled with one straight-alpha color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.to_premul();
        let data = px.repeat(width as usize * height as usize);
        Self::from_parts(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Return `true` when the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content identity.
    pub fn id(&self) -> BitmapId {
        self.id
    }

    /// Premultiplied pixel at `(x, y)`; transparent when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Horizontally flipped copy, used for right-to-left glyphs.
    pub fn mirrored(&self) -> Self {
        let w = self.width as usize;
        let mut out = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(w.max(1) * 4) {
            for px in row.chunks_exact(4).rev() {
                out.extend_from_slice(px);
            }
        }
        Self::from_parts(self.width, self.height, out)
    }

    /// Resample to `width`x`height` with a triangle filter.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if (width, height) == (self.width, self.height) || self.is_empty() {
            return self.clone();
        }
        let Some(src) =
            image::RgbaImage::from_raw(self.width, self.height, self.data.as_ref().clone())
        else {
            return self.clone();
        };
        let out = image::imageops::resize(
            &src,
            width,
            height,
            image::imageops::FilterType::Triangle,
        );
        Self::from_parts(width, height, out.into_raw())
    }

    /// Map every pixel through `f`, keeping dimensions.
    pub(crate) fn map_pixels(&self, mut f: impl FnMut([u8; 4]) -> [u8; 4]) -> Self {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&f([px[0], px[1], px[2], px[3]]));
        }
        Self::from_parts(self.width, self.height, out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;
