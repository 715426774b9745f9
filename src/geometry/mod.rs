//! Minimum content size calculation.

/// Content size from specs, text metrics and icons.
pub mod size;
