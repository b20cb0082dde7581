//! Enemy fire decision.

use rand::Rng;

use starstrike_core::config::Tuning;
use starstrike_core::enums::BehaviorState;

/// Input to the fire decision for one enemy.
#[derive(Debug, Clone, Copy)]
pub struct FireContext {
    pub state: BehaviorState,
    pub distance: f64,
    pub now_ms: f64,
    pub last_fire_ms: Option<f64>,
    pub fire_interval_ms: f64,
}

/// Decide whether an enemy fires this tick.
///
/// Evading enemies normally hold fire; each eligible tick they still shoot
/// with `evade_fire_chance`.
pub fn should_fire<R: Rng + ?Sized>(ctx: &FireContext, tuning: &Tuning, rng: &mut R) -> bool {
    if ctx.distance >= tuning.fire_range {
        return false;
    }

    let reloaded = match ctx.last_fire_ms {
        Some(last) => ctx.now_ms - last > ctx.fire_interval_ms * tuning.fire_interval_factor,
        None => true,
    };
    if !reloaded {
        return false;
    }

    match ctx.state {
        BehaviorState::Evade => rng.gen_bool(tuning.evade_fire_chance),
        BehaviorState::Pursue | BehaviorState::Strafe => true,
    }
}

/// Roll a per-enemy base fire interval (ms).
pub fn roll_fire_interval<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f64 {
    let (lo, hi) = tuning.fire_interval_ms;
    rng.gen_range(lo..=hi)
}
