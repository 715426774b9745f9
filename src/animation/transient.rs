use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::animation::controller::TimerHandle;
use crate::animation::ease::Ease;
use crate::animation::liveness::{LivenessRegistry, WidgetId};

/// Timed opacity fade of an auto-hiding element such as a transient scroll bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransientAnimation {
    /// Owning widget.
    pub owner: WidgetId,
    /// Opacity at the start.
    pub from: f32,
    /// Opacity at the end.
    pub to: f32,
    /// Start instant.
    pub started: Instant,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub ease: Ease,
}

impl TransientAnimation {
    /// Normalized progress at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased opacity at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        self.ease.lerp(self.from, self.to, self.progress(now))
    }

    /// Return `true` once the fade has reached its end.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Transient animations keyed by owner.
#[derive(Debug)]
pub struct TransientTable {
    entries: HashMap<WidgetId, TransientAnimation>,
    timer: TimerHandle,
}

impl TransientTable {
    /// Empty table whose timer fires every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            timer: TimerHandle::new(interval),
        }
    }

    /// Tick timer.
    pub fn timer(&self) -> TimerHandle {
        self.timer
    }

    /// Fade `owner` to `to`. A running fade of the same owner is replaced, starting from its
    /// current value.
    pub fn start(
        &mut self,
        owner: WidgetId,
        from: f32,
        to: f32,
        now: Instant,
        duration: Duration,
        ease: Ease,
    ) {
        let from = self.entries.get(&owner).map_or(from, |a| a.value(now));
        self.entries.insert(
            owner,
            TransientAnimation {
                owner,
                from,
                to,
                started: now,
                duration,
                ease,
            },
        );
        self.timer.set_active(true);
    }

    /// Current opacity of `owner`'s fade.
    pub fn value(&self, owner: WidgetId, now: Instant) -> Option<f32> {
        self.entries.get(&owner).map(|a| a.value(now))
    }

    /// Return `true` while `owner` has a running fade.
    pub fn contains(&self, owner: WidgetId) -> bool {
        self.entries.contains_key(&owner)
    }

    /// Number of running fades.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is fading.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance to `now`, removing finished fades. Returns the owners to repaint.
    pub fn on_transient_tick(&mut self, now: Instant, live: &LivenessRegistry) -> Vec<WidgetId> {
        self.entries.retain(|id, _| live.is_alive(*id));
        let mut repaint: Vec<WidgetId> = self.entries.keys().copied().collect();
        self.entries.retain(|_, a| !a.is_finished(now));
        self.timer.set_active(!self.entries.is_empty());
        repaint.sort_unstable();
        repaint
    }

    /// Drop `owner`'s fade on its destruction signal.
    pub fn owner_destroyed(&mut self, owner: WidgetId) {
        self.entries.remove(&owner);
        self.timer.set_active(!self.entries.is_empty());
    }

    /// Drop every fade.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.timer.set_active(false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transient.rs"]
mod tests;
