//! Per-widget rendering specs and their lookup.

/// Built-in default theme.
pub mod builtin;
/// Spec data types.
pub mod model;
/// Two-level spec lookup.
pub mod resolver;
