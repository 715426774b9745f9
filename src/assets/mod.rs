//! Raster and vector asset handling.

/// Immutable premultiplied rasters.
pub mod bitmap;
/// Icon decoding and SVG parsing.
pub mod decode;
/// Named element libraries.
pub mod elements;
/// Rasterization of single SVG elements.
pub mod svg_raster;
