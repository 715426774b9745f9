use std::borrow::Cow;

use crate::assets::bitmap::Bitmap;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SkinError, SkinResult};

/// Logical extent of a shaped text block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the widest line.
    pub width: f64,
    /// Total height of all lines.
    pub height: f64,
    /// Number of laid-out lines.
    pub lines: usize,
}

/// Font metrics and glyph rasterization used by label painting and size calculation.
pub trait TextShaper {
    /// Measure `text` at `font_size`, wrapping at `wrap_width` when given.
    fn measure(&mut self, text: &str, font_size: f32, wrap_width: Option<f64>) -> TextMetrics;

    /// Height of one line at `font_size`.
    fn line_height(&mut self, font_size: f32) -> f64;

    /// Rasterize `text` in `color` at device scale `dpr`, sized to its device extent.
    ///
    /// Empty text yields `Ok(None)`.
    fn rasterize(
        &mut self,
        text: &str,
        font_size: f32,
        wrap_width: Option<f64>,
        color: Rgba8,
        dpr: f64,
    ) -> SkinResult<Option<Bitmap>>;
}

/// [`TextShaper`] backed by `parley` layout and `vello_cpu` glyph rendering of one font.
pub struct ParleyShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ParleyShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyShaper")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyShaper {
    /// Register `font_bytes` (TTF/OTF) and use its first family for all text.
    pub fn new(font_bytes: Vec<u8>) -> SkinResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SkinError::validation("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SkinError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Family name of the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout(
        &mut self,
        text: &str,
        font_size: f32,
        scale: f32,
        wrap_width: Option<f64>,
        brush: Rgba8,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, scale, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        match wrap_width {
            Some(w) => {
                let w = (w as f32 * scale).max(1.0);
                layout.break_all_lines(Some(w));
                layout.align(
                    Some(w),
                    parley::Alignment::Start,
                    parley::AlignmentOptions::default(),
                );
            }
            None => layout.break_all_lines(None),
        }
        layout
    }
}

impl TextShaper for ParleyShaper {
    fn measure(&mut self, text: &str, font_size: f32, wrap_width: Option<f64>) -> TextMetrics {
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return TextMetrics::default();
        }
        let layout = self.layout(text, font_size, 1.0, wrap_width, Rgba8::TRANSPARENT);
        TextMetrics {
            width: f64::from(layout.width()).ceil(),
            height: f64::from(layout.height()).ceil(),
            lines: layout.lines().count(),
        }
    }

    fn line_height(&mut self, font_size: f32) -> f64 {
        if !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }
        let layout = self.layout("Ag", font_size, 1.0, None, Rgba8::TRANSPARENT);
        f64::from(layout.height()).ceil()
    }

    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    fn rasterize(
        &mut self,
        text: &str,
        font_size: f32,
        wrap_width: Option<f64>,
        color: Rgba8,
        dpr: f64,
    ) -> SkinResult<Option<Bitmap>> {
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return Ok(None);
        }
        let layout = self.layout(text, font_size, dpr as f32, wrap_width, color);
        let w = f64::from(layout.width()).ceil();
        let h = f64::from(layout.height()).ceil();
        if w < 1.0 || h < 1.0 {
            return Ok(None);
        }
        let to_u16 = |v: f64| -> SkinResult<u16> {
            u16::try_from(v as u32)
                .map_err(|_| SkinError::render(format!("text raster too large: {v}px")))
        };
        let (w16, h16) = (to_u16(w)?, to_u16(h)?);

        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                // Baseline-relative positions; `glyphs()` only carries per-glyph offsets.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);

        let bmp = Bitmap::from_premul(
            u32::from(w16),
            u32::from(h16),
            pixmap.data_as_u8_slice().to_vec(),
        )?;
        Ok(Some(bmp))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
