//! Delayed side effects.
//!
//! Entries carry the session generation they were scheduled in. A reset
//! bumps the generation, so anything left over from an earlier session is
//! dropped instead of firing into the new one.

use glam::DVec3;

/// What happens when a scheduled event comes due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduledAction {
    /// Follow-up burst of the structure explosion.
    SecondaryExplosion {
        origin: DVec3,
        particle_count: usize,
        radius: f64,
    },
    /// Show the victory overlay and restart affordance.
    RevealVictory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEvent {
    /// Session time at which the event fires (ms).
    pub fire_at_ms: f64,
    pub generation: u64,
    pub action: ScheduledAction,
}

/// Pending events, kept in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn schedule(&mut self, fire_at_ms: f64, generation: u64, action: ScheduledAction) {
        self.events.push(ScheduledEvent {
            fire_at_ms,
            generation,
            action,
        });
    }

    /// Remove and return every event due at `now_ms` for `generation`, in
    /// firing order. Stale events from other generations are discarded.
    pub fn drain_due(&mut self, now_ms: f64, generation: u64) -> Vec<ScheduledAction> {
        self.events.retain(|e| e.generation == generation);

        let mut due: Vec<ScheduledEvent> = Vec::new();
        self.events.retain(|e| {
            if e.fire_at_ms <= now_ms {
                due.push(*e);
                false
            } else {
                true
            }
        });

        due.sort_by(|a, b| a.fire_at_ms.total_cmp(&b.fire_at_ms));
        due.into_iter().map(|e| e.action).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
