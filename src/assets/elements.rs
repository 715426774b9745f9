use std::sync::Arc;

use crate::assets::bitmap::Bitmap;
use crate::assets::decode::parse_svg;
use crate::assets::svg_raster::{element_bounds, rasterize_element_to_premul_rgba8};
use crate::foundation::core::Size;
use crate::foundation::error::SkinResult;

/// A library of named vector elements that can be rasterized at any size.
pub trait ElementSource {
    /// Return `true` when an element named `id` exists and has area.
    fn has_element(&self, id: &str) -> bool {
        self.element_size(id).is_some()
    }

    /// Natural (authored) size of `id` in logical pixels.
    fn element_size(&self, id: &str) -> Option<Size>;

    /// Rasterize `id` stretched to `width`x`height` device pixels.
    ///
    /// Missing elements and empty sizes yield `Ok(None)`.
    fn rasterize(&self, id: &str, width: u32, height: u32) -> SkinResult<Option<Bitmap>>;
}

/// Elements backed by one parsed SVG document, addressed by element id.
#[derive(Clone)]
pub struct SvgElements {
    tree: Arc<usvg::Tree>,
}

impl std::fmt::Debug for SvgElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.tree.size();
        f.debug_struct("SvgElements")
            .field("width", &size.width())
            .field("height", &size.height())
            .finish()
    }
}

impl SvgElements {
    /// Parse SVG bytes.
    pub fn from_data(bytes: &[u8]) -> SkinResult<Self> {
        Ok(Self {
            tree: Arc::new(parse_svg(bytes)?),
        })
    }

    /// Parse an SVG document held in a string.
    pub fn from_svg_str(svg: &str) -> SkinResult<Self> {
        Self::from_data(svg.as_bytes())
    }
}

impl ElementSource for SvgElements {
    fn element_size(&self, id: &str) -> Option<Size> {
        if id.is_empty() {
            return None;
        }
        element_bounds(&self.tree, id).map(|(_, _, w, h)| Size::new(f64::from(w), f64::from(h)))
    }

    fn rasterize(&self, id: &str, width: u32, height: u32) -> SkinResult<Option<Bitmap>> {
        if id.is_empty() {
            return Ok(None);
        }
        match rasterize_element_to_premul_rgba8(&self.tree, id, width, height)? {
            Some(data) => Ok(Some(Bitmap::from_premul(width, height, data)?)),
            None => Ok(None),
        }
    }
}

/// Active element library with a fallback library behind it.
///
/// Each lookup tries `active` first and then `fallback`.
#[derive(Clone, Copy)]
pub struct LayeredElements<'a> {
    active: &'a dyn ElementSource,
    fallback: &'a dyn ElementSource,
}

impl<'a> LayeredElements<'a> {
    /// Layer `active` over `fallback`.
    pub fn new(active: &'a dyn ElementSource, fallback: &'a dyn ElementSource) -> Self {
        Self { active, fallback }
    }
}

impl ElementSource for LayeredElements<'_> {
    fn has_element(&self, id: &str) -> bool {
        self.active.has_element(id) || self.fallback.has_element(id)
    }

    fn element_size(&self, id: &str) -> Option<Size> {
        self.active
            .element_size(id)
            .or_else(|| self.fallback.element_size(id))
    }

    fn rasterize(&self, id: &str, width: u32, height: u32) -> SkinResult<Option<Bitmap>> {
        if self.active.has_element(id) {
            return self.active.rasterize(id, width, height);
        }
        self.fallback.rasterize(id, width, height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/elements.rs"]
mod tests;
