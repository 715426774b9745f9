//! Raster effects and the pixmap cache.

/// Bounded bitmap cache keyed by source, size and effect.
pub mod cache;
/// Premultiplied compositing kernels.
pub mod composite;
/// Tint and translucency.
pub mod tint;
