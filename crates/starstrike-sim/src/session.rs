//! Per-session bookkeeping that is not part of the entity registry.
//!
//! Stored on `SimulationEngine` and rebuilt on every start or restart.

use starstrike_core::config::Tuning;
use starstrike_core::state::ScoreView;

/// Approach-encounter thresholds, consumed strictly in order.
#[derive(Debug, Clone, Default)]
pub struct EncounterTrack {
    distances: Vec<f64>,
    next: usize,
}

impl EncounterTrack {
    pub fn new(distances: Vec<f64>) -> Self {
        Self { distances, next: 0 }
    }

    /// Index and distance of the next unconsumed threshold.
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.distances.get(self.next).map(|&d| (self.next, d))
    }

    /// Mark the next threshold as triggered.
    pub fn consume(&mut self) {
        if self.next < self.distances.len() {
            self.next += 1;
        }
    }

    pub fn remaining(&self) -> &[f64] {
        &self.distances[self.next..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.distances.len()
    }
}

/// Running score counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub enemies_destroyed: u32,
    pub structure_hits: u32,
    /// Trigger pulls, not individual bolts.
    pub shots_fired: u32,
    pub hits_taken: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            enemies_destroyed: self.enemies_destroyed,
            structure_hits: self.structure_hits,
            shots_fired: self.shots_fired,
            hits_taken: self.hits_taken,
        }
    }
}

/// Spawn timers, encounter progress and score for one session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub encounters: EncounterTrack,
    /// Session time of the next ambient spawn. `None` once the ambient
    /// spawner has been halted.
    pub next_ambient_ms: Option<f64>,
    pub score: ScoreState,
}

impl Session {
    /// Fresh session starting at `now_ms`.
    pub fn begin(tuning: &Tuning, now_ms: f64) -> Self {
        Self {
            encounters: EncounterTrack::new(tuning.encounter_distances.clone()),
            next_ambient_ms: Some(now_ms + tuning.ambient_spawn_interval_ms),
            score: ScoreState::default(),
        }
    }
}
