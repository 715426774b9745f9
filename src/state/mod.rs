//! Widget classification and canonical state resolution.

/// Widget kinds and their state rules.
pub mod kind;
/// Flags to canonical state.
pub mod resolver;
