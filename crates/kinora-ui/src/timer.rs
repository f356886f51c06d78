//! Per-scene timer registry.
//!
//! Timers are keyed by `(owner, id)`. Each frame every entry accumulates the
//! frame delta; an entry that reaches its interval fires once and its
//! accumulator restarts at zero. Overshoot is discarded: a 100 ms timer ticked
//! with two 150 ms frames fires twice, not three times.

use crate::tree::WidgetId;

/// Application-chosen timer identifier, unique per owning widget.
pub type TimerId = u32;

#[derive(Debug, Clone, PartialEq)]
struct TimerEntry {
    owner: WidgetId,
    id: TimerId,
    interval_ms: f32,
    elapsed_ms: f32,
}

/// Registered timers in registration order.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    entries: Vec<TimerEntry>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `(owner, id)`. Returns `false` if the pair already exists,
    /// in which case the existing entry is left untouched.
    pub fn add(&mut self, owner: WidgetId, id: TimerId, interval_ms: f32) -> bool {
        if self.contains(owner, id) {
            return false;
        }
        self.entries.push(TimerEntry {
            owner,
            id,
            interval_ms: interval_ms.max(0.0),
            elapsed_ms: 0.0,
        });
        true
    }

    /// Unregisters `(owner, id)`. Returns `false` if it was not registered.
    pub fn kill(&mut self, owner: WidgetId, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.owner == owner && e.id == id));
        self.entries.len() != before
    }

    /// Unregisters every timer owned by `owner`, returning how many were removed.
    pub fn kill_all(&mut self, owner: WidgetId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner != owner);
        before - self.entries.len()
    }

    pub fn contains(&self, owner: WidgetId, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.owner == owner && e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances every timer by `dt_ms` and returns the `(owner, id)` pairs that
    /// fired, in registration order.
    pub fn tick(&mut self, dt_ms: f32) -> Vec<(WidgetId, TimerId)> {
        let mut fired = Vec::new();
        for entry in &mut self.entries {
            entry.elapsed_ms += dt_ms;
            if entry.elapsed_ms >= entry.interval_ms {
                entry.elapsed_ms = 0.0;
                fired.push((entry.owner, entry.id));
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<WidgetId> {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let w = ids(1)[0];
        let mut timers = TimerRegistry::new();
        assert!(timers.add(w, 5, 100.0));
        timers.tick(60.0);
        assert!(!timers.add(w, 5, 10.0));
        assert_eq!(timers.len(), 1);
        // The first entry keeps its interval and accumulator.
        assert_eq!(timers.tick(40.0), vec![(w, 5)]);
    }

    #[test]
    fn overshoot_is_discarded() {
        let w = ids(1)[0];
        let mut timers = TimerRegistry::new();
        timers.add(w, 5, 100.0);
        assert_eq!(timers.tick(150.0), vec![(w, 5)]);
        assert_eq!(timers.tick(150.0), vec![(w, 5)]);
        assert!(timers.tick(50.0).is_empty());
    }

    #[test]
    fn fires_in_registration_order() {
        let w = ids(2);
        let mut timers = TimerRegistry::new();
        timers.add(w[1], 1, 10.0);
        timers.add(w[0], 2, 10.0);
        assert_eq!(timers.tick(10.0), vec![(w[1], 1), (w[0], 2)]);
    }

    #[test]
    fn kill_removes_only_the_pair() {
        let w = ids(2);
        let mut timers = TimerRegistry::new();
        timers.add(w[0], 1, 10.0);
        timers.add(w[0], 2, 10.0);
        timers.add(w[1], 1, 10.0);

        assert!(timers.kill(w[0], 1));
        assert!(!timers.kill(w[0], 1));
        assert!(timers.contains(w[1], 1));

        assert_eq!(timers.kill_all(w[0]), 1);
        assert_eq!(timers.len(), 1);
    }
}
