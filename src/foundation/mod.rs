//! Core value types, errors and integer pixel math shared by every layer.

/// Colors, alignment and rectangle helpers.
pub mod core;
/// Error type and result alias.
pub mod error;
/// Integer pixel math and hashing.
pub(crate) mod math;
