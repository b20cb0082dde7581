//! Scripted pilot for headless runs.
//!
//! Reads the latest snapshot and decides what to hold and which session
//! command to send: start from the title screen, fly at the structure with
//! the throttle open, fire whenever a bolt would connect, and restart after
//! a pause on the end screen until the session budget runs out.

use glam::{DQuat, DVec3};

use starstrike_core::commands::{ActionSet, PlayerCommand};
use starstrike_core::constants::{ENEMY_HIT_RADIUS, LASER_LIFETIME, LASER_SPEED, TARGET_RADIUS};
use starstrike_core::enums::GamePhase;
use starstrike_core::state::GameStateSnapshot;

/// Ticks spent on an end screen before restarting (6s at 60Hz), long
/// enough for the victory overlay to appear.
pub const RESTART_DELAY_TICKS: u64 = 360;

/// Ignore steering errors smaller than this fraction of the range.
const STEER_DEADZONE: f64 = 0.02;

/// What the pilot wants this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    pub actions: ActionSet,
    pub command: Option<PlayerCommand>,
}

#[derive(Debug)]
pub struct Autopilot {
    sessions_left: u32,
    ended_at: Option<(u64, u64)>,
    finished: bool,
}

impl Autopilot {
    /// Pilot that plays `sessions` sessions (at least one).
    pub fn new(sessions: u32) -> Self {
        Self {
            sessions_left: sessions.max(1),
            ended_at: None,
            finished: false,
        }
    }

    /// True once the last session has ended and its delay has passed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Decision {
        if snapshot.phase.is_terminal() {
            return self.on_end_screen(snapshot);
        }
        match snapshot.phase {
            GamePhase::Start => Decision {
                command: Some(PlayerCommand::StartGame),
                ..Default::default()
            },
            _ => {
                self.ended_at = None;
                Decision {
                    actions: fly(snapshot),
                    command: None,
                }
            }
        }
    }

    fn on_end_screen(&mut self, snapshot: &GameStateSnapshot) -> Decision {
        let key = (snapshot.generation, snapshot.time.tick);
        let (generation, since) = *self.ended_at.get_or_insert(key);
        if generation != snapshot.generation {
            self.ended_at = Some(key);
            return Decision::default();
        }
        if snapshot.time.tick.saturating_sub(since) < RESTART_DELAY_TICKS {
            return Decision::default();
        }

        self.ended_at = None;
        if self.sessions_left > 1 {
            self.sessions_left -= 1;
            log::info!(
                "restarting after {:?} ({} sessions left)",
                snapshot.phase,
                self.sessions_left
            );
            Decision {
                command: Some(PlayerCommand::RestartGame),
                ..Default::default()
            }
        } else {
            self.finished = true;
            Decision::default()
        }
    }
}

/// Throttle up, turn the nose onto the structure and fire when on target.
fn fly(snapshot: &GameStateSnapshot) -> ActionSet {
    let player = &snapshot.player;
    let to_local = |point: DVec3| to_ship_frame(player.orientation, point - player.position);

    let mut actions = ActionSet {
        speed_up: true,
        ..Default::default()
    };

    if !snapshot.target.destroyed {
        let aim = to_local(snapshot.target.position);
        let deadzone = aim.length() * STEER_DEADZONE;
        actions.yaw_left = aim.x > deadzone;
        actions.yaw_right = aim.x < -deadzone;
        // Positive pitch swings the nose towards local -Y.
        actions.pitch_up = aim.y < -deadzone;
        actions.pitch_down = aim.y > deadzone;
        actions.fire = on_target(aim, TARGET_RADIUS * 0.8);
    }

    if !actions.fire {
        actions.fire = snapshot
            .enemies
            .iter()
            .any(|enemy| on_target(to_local(enemy.position), ENEMY_HIT_RADIUS));
    }

    actions
}

/// World offset expressed in the ship's local frame (+Z forward).
fn to_ship_frame(orientation: DQuat, offset: DVec3) -> DVec3 {
    orientation.inverse() * offset
}

/// Whether a bolt fired straight ahead passes within `radius` of a point
/// inside laser range.
fn on_target(local: DVec3, radius: f64) -> bool {
    let range = LASER_SPEED * LASER_LIFETIME as f64;
    local.z > 0.0 && local.z < range + radius && local.truncate().length() < radius
}
