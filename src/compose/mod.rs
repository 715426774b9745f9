//! Layered widget painting: frame, interior, indicator and label.

/// Per-paint layer composition and state crossfades.
pub mod compositor;
/// Frame border and interior fill.
pub mod frame;
/// Indicator glyphs.
pub mod indicator;
/// Icon and text labels.
pub mod label;
/// Layer rectangles.
pub mod rects;
