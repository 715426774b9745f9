use std::collections::HashSet;

/// Opaque handle standing in for a host widget.
///
/// Animation tables hold ids instead of widget references; a destroyed widget is detected by
/// asking the [`LivenessRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Raw id value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Tracks which widgets are still alive.
#[derive(Debug, Default)]
pub struct LivenessRegistry {
    alive: HashSet<WidgetId>,
    next: u64,
}

impl LivenessRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh live id. Ids are never reused.
    pub fn register(&mut self) -> WidgetId {
        self.next += 1;
        let id = WidgetId(self.next);
        self.alive.insert(id);
        id
    }

    /// Mark `id` destroyed. Returns `false` when it was not alive.
    pub fn destroy(&mut self, id: WidgetId) -> bool {
        self.alive.remove(&id)
    }

    /// Return `true` while `id` is alive.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.alive.contains(&id)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    /// Return `true` when no widget is alive.
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/liveness.rs"]
mod tests;
