//! Timed state transitions, busy progress and transient fades.

/// State-change and busy-progress controller.
pub mod controller;
/// Easing curves.
pub mod ease;
/// Widget liveness tracking.
pub mod liveness;
/// Auto-hide fades keyed by owner.
pub mod transient;
