//! Game progression state machine.
//!
//! Start -> Play -> (GameOver | Victory), and back to Play on restart.
//! Every legal transition is listed in [`next_phase`]; anything else is
//! rejected, which is what keeps each end-of-game transition to exactly once
//! per session.

use starstrike_core::enums::GamePhase;

/// Requested progression change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave the start screen.
    Start,
    /// Fresh session from a terminal phase.
    Restart,
    /// Target structure integrity exhausted.
    Victory,
    /// Player integrity exhausted.
    GameOver,
}

/// Legal transition table.
pub fn next_phase(phase: GamePhase, transition: Transition) -> Option<GamePhase> {
    match (phase, transition) {
        (GamePhase::Start, Transition::Start) => Some(GamePhase::Play),
        (GamePhase::GameOver | GamePhase::Victory, Transition::Restart) => Some(GamePhase::Play),
        (GamePhase::Play, Transition::Victory) => Some(GamePhase::Victory),
        (GamePhase::Play, Transition::GameOver) => Some(GamePhase::GameOver),
        _ => None,
    }
}

/// Current phase plus the session generation token.
#[derive(Debug, Clone, Default)]
pub struct Progression {
    phase: GamePhase,
    generation: u64,
}

impl Progression {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Bumps on every transition into Play.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a transition if legal. Returns whether it happened.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match next_phase(self.phase, transition) {
            Some(next) => {
                if next == GamePhase::Play {
                    self.generation += 1;
                }
                self.phase = next;
                true
            }
            None => false,
        }
    }
}
