//! Element rendering onto device-pixel surfaces.
//!
//! Logical rectangles are mapped to device pixels by rounding each edge at the surface's device
//! pixel ratio. Missing elements and empty regions draw nothing.

/// Stretch, tile and nine-patch element rendering.
pub mod asset;
/// Premultiplied RGBA8 drawing target.
pub mod surface;
/// Text measurement and rasterization.
pub mod text;
