//! Enemy behavior finite state machine.
//!
//! Transitions are gated by a per-enemy countdown timer (ticks). When it
//! runs out, a pursuer within engage range breaks off into a strafe run or an
//! evasive jink; everything else goes back to pursuit. Strafe and evade can
//! only ever return to pursuit.

use glam::DVec3;
use rand::Rng;

use starstrike_core::components::Behavior;
use starstrike_core::config::Tuning;
use starstrike_core::constants::*;
use starstrike_core::enums::BehaviorState;

/// Output from the behavior FSM.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorUpdate {
    pub behavior: Behavior,
    pub state_changed: bool,
}

/// Advance one enemy's behavior by one tick.
///
/// `distance` and `dir_to_player` are measured from the enemy this tick.
pub fn evaluate<R: Rng + ?Sized>(
    current: &Behavior,
    distance: f64,
    dir_to_player: DVec3,
    tuning: &Tuning,
    rng: &mut R,
) -> BehaviorUpdate {
    let mut behavior = *current;
    behavior.timer = behavior.timer.saturating_sub(1);

    if behavior.timer > 0 {
        return BehaviorUpdate {
            behavior,
            state_changed: false,
        };
    }

    let next = match current.state {
        BehaviorState::Pursue if distance < tuning.engage_range => {
            break_off(dir_to_player, tuning, rng)
        }
        _ => Behavior::pursue(roll_ticks(rng, PURSUE_TIMER)),
    };

    BehaviorUpdate {
        state_changed: next.state != current.state,
        behavior: next,
    }
}

/// Leave pursuit for a strafe run or an evasive maneuver.
fn break_off<R: Rng + ?Sized>(dir_to_player: DVec3, tuning: &Tuning, rng: &mut R) -> Behavior {
    if rng.gen_bool(tuning.strafe_chance) {
        let jitter = DVec3::new(
            (rng.gen::<f64>() - 0.5) * STRAFE_JITTER,
            (rng.gen::<f64>() - 0.5) * STRAFE_JITTER,
            0.0,
        );
        let strafe_direction = (dir_to_player + jitter)
            .try_normalize()
            .unwrap_or(dir_to_player);
        Behavior {
            state: BehaviorState::Strafe,
            timer: roll_ticks(rng, STRAFE_TIMER),
            strafe_direction,
            evade_offset: DVec3::ZERO,
        }
    } else {
        let evade_offset = DVec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        Behavior {
            state: BehaviorState::Evade,
            timer: roll_ticks(rng, EVADE_TIMER),
            strafe_direction: DVec3::ZERO,
            evade_offset,
        }
    }
}

/// Uniform tick count in the inclusive range `(lo, hi)`.
pub fn roll_ticks<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (u32, u32)) -> u32 {
    rng.gen_range(lo..=hi.max(lo))
}
