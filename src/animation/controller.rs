use std::collections::HashMap;
use std::time::Duration;

use crate::animation::liveness::{LivenessRegistry, WidgetId};
use crate::compose::compositor::{FadeDirection, Transition};
use crate::state::resolver::StateName;

/// Same-thread periodic timer the host polls.
///
/// The host schedules a callback every [`TimerHandle::interval`] while
/// [`TimerHandle::active`] is `true` and forwards it to the matching tick method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    interval: Duration,
    active: bool,
}

impl TimerHandle {
    /// Stopped timer firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: false,
        }
    }

    /// Return `true` while the timer should fire.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Firing period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// A running state-change animation of one widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationEntry {
    /// State the widget was in when the change was observed.
    pub start: StateName,
    /// State being animated to.
    pub target: StateName,
    /// Blend progress in `[0, 100]`.
    pub opacity: u8,
    /// Fade direction.
    pub direction: FadeDirection,
}

impl AnimationEntry {
    /// Blend parameters for the compositor.
    pub fn transition(&self) -> Transition {
        Transition {
            from: self.start,
            opacity: self.opacity,
            direction: self.direction,
        }
    }
}

/// Elapsed ticks of an indeterminate progress bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusyProgress {
    /// Progress-timer ticks since the bar became busy.
    pub ticks: u64,
}

/// Position of a busy chunk of `chunk` length moving back and forth over `track`.
///
/// The chunk advances `step` per tick and bounces off both ends.
pub fn ping_pong(ticks: u64, step: u32, track: f64, chunk: f64) -> f64 {
    let span = (track - chunk).max(0.0);
    if span <= 0.0 || step == 0 {
        return 0.0;
    }
    let period = 2.0 * span;
    let travelled = (ticks as f64 * f64::from(step)) % period;
    if travelled > span {
        period - travelled
    } else {
        travelled
    }
}

/// Tuning of the state-change and busy-progress timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOpts {
    /// Opacity added per opacity tick.
    pub opacity_step: u8,
    /// Opacity timer period.
    pub opacity_interval: Duration,
    /// Track units added per progress tick.
    pub progress_step: u32,
    /// Progress timer period.
    pub progress_interval: Duration,
}

/// Per-widget state-transition state machine plus the busy-progress table.
///
/// A widget is idle until a watched state change creates an [`AnimationEntry`]; the entry is
/// removed once its opacity reaches 100 or the widget is destroyed.
#[derive(Debug)]
pub struct AnimationController {
    opts: ControllerOpts,
    last_state: HashMap<WidgetId, StateName>,
    entries: HashMap<WidgetId, AnimationEntry>,
    progress: HashMap<WidgetId, BusyProgress>,
    opacity_timer: TimerHandle,
    progress_timer: TimerHandle,
}

impl AnimationController {
    /// Idle controller.
    pub fn new(opts: ControllerOpts) -> Self {
        Self {
            opts,
            last_state: HashMap::new(),
            entries: HashMap::new(),
            progress: HashMap::new(),
            opacity_timer: TimerHandle::new(opts.opacity_interval),
            progress_timer: TimerHandle::new(opts.progress_interval),
        }
    }

    /// Opacity timer.
    pub fn opacity_timer(&self) -> TimerHandle {
        self.opacity_timer
    }

    /// Progress timer.
    pub fn progress_timer(&self) -> TimerHandle {
        self.progress_timer
    }

    /// Running entry of `id`, if any.
    pub fn entry(&self, id: WidgetId) -> Option<&AnimationEntry> {
        self.entries.get(&id)
    }

    /// Number of running state-change animations.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Record the state `id` is painted in; a change starts a transition at opacity 0.
    ///
    /// The first observation of a widget only records its state. A change during a running
    /// transition restarts it from the previously recorded state.
    pub fn state_changed(&mut self, id: WidgetId, state: StateName) -> Option<Transition> {
        let prior = self.last_state.insert(id, state);
        if let Some(prev) = prior.filter(|p| *p != state) {
            let entry = AnimationEntry {
                start: prev,
                target: state,
                opacity: 0,
                direction: if state == StateName::Normal {
                    FadeDirection::Out
                } else {
                    FadeDirection::In
                },
            };
            tracing::debug!(
                widget = id.as_u64(),
                from = %prev,
                to = %state,
                "state transition started"
            );
            self.entries.insert(id, entry);
            self.opacity_timer.set_active(true);
        }
        self.entries.get(&id).map(AnimationEntry::transition)
    }

    /// Record `state` without animating, cancelling any running transition of `id`.
    pub fn set_state_instant(&mut self, id: WidgetId, state: StateName) {
        self.last_state.insert(id, state);
        self.entries.remove(&id);
        self.sync_opacity_timer();
    }

    /// Advance every transition by one step. Returns the widgets to repaint.
    ///
    /// Entries reaching 100 are removed; their widgets are still returned so they repaint at
    /// full blend. Destroyed widgets are dropped silently.
    pub fn on_opacity_tick(&mut self, live: &LivenessRegistry) -> Vec<WidgetId> {
        self.prune(live);
        let step = self.opts.opacity_step.max(1);
        let mut repaint = Vec::with_capacity(self.entries.len());
        self.entries.retain(|id, entry| {
            entry.opacity = entry.opacity.saturating_add(step).min(100);
            repaint.push(*id);
            if entry.opacity >= 100 {
                tracing::debug!(widget = id.as_u64(), to = %entry.target, "state transition done");
                false
            } else {
                true
            }
        });
        self.sync_opacity_timer();
        repaint.sort_unstable();
        repaint
    }

    /// Mark `id` as a busy progress bar, starting the progress timer.
    pub fn start_busy(&mut self, id: WidgetId) {
        self.progress.entry(id).or_default();
        self.progress_timer.set_active(true);
    }

    /// Stop animating the busy progress bar `id`.
    pub fn stop_busy(&mut self, id: WidgetId) {
        self.progress.remove(&id);
        self.progress_timer.set_active(!self.progress.is_empty());
    }

    /// Busy state of `id`.
    pub fn busy(&self, id: WidgetId) -> Option<BusyProgress> {
        self.progress.get(&id).copied()
    }

    /// Chunk position of the busy bar `id` along a `track` of the given length.
    pub fn busy_position(&self, id: WidgetId, track: f64, chunk: f64) -> Option<f64> {
        let busy = self.progress.get(&id)?;
        Some(ping_pong(busy.ticks, self.opts.progress_step, track, chunk))
    }

    /// Advance every busy progress bar. Returns the widgets to repaint.
    pub fn on_progress_tick(&mut self, live: &LivenessRegistry) -> Vec<WidgetId> {
        self.prune(live);
        let mut repaint: Vec<WidgetId> = self
            .progress
            .iter_mut()
            .map(|(id, busy)| {
                busy.ticks = busy.ticks.wrapping_add(1);
                *id
            })
            .collect();
        self.progress_timer.set_active(!self.progress.is_empty());
        repaint.sort_unstable();
        repaint
    }

    /// Forget everything about `id`.
    pub fn widget_destroyed(&mut self, id: WidgetId) {
        self.last_state.remove(&id);
        self.entries.remove(&id);
        self.progress.remove(&id);
        self.sync_opacity_timer();
        self.progress_timer.set_active(!self.progress.is_empty());
    }

    /// Cancel all transitions and busy bars.
    pub fn reset(&mut self) {
        self.last_state.clear();
        self.entries.clear();
        self.progress.clear();
        self.opacity_timer.set_active(false);
        self.progress_timer.set_active(false);
    }

    fn prune(&mut self, live: &LivenessRegistry) {
        let before = self.entries.len() + self.progress.len();
        self.last_state.retain(|id, _| live.is_alive(*id));
        self.entries.retain(|id, _| live.is_alive(*id));
        self.progress.retain(|id, _| live.is_alive(*id));
        let dropped = before - (self.entries.len() + self.progress.len());
        if dropped > 0 {
            tracing::trace!(dropped, "dropped animations of destroyed widgets");
        }
    }

    fn sync_opacity_timer(&mut self) {
        self.opacity_timer.set_active(!self.entries.is_empty());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
