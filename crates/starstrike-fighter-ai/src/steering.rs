//! Per-state movement and facing.

use glam::DVec3;

use starstrike_core::components::Behavior;
use starstrike_core::constants::*;
use starstrike_core::enums::BehaviorState;

/// Where an enemy moves and looks this tick. Both are unit vectors, or zero
/// when degenerate (enemy exactly on the player).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub move_direction: DVec3,
    pub look_direction: DVec3,
}

/// Compute steering for one enemy.
pub fn steer(behavior: &Behavior, distance: f64, dir_to_player: DVec3) -> Steering {
    let move_direction = match behavior.state {
        BehaviorState::Pursue => pursue_direction(distance, dir_to_player),
        BehaviorState::Strafe => behavior.strafe_direction,
        BehaviorState::Evade => (dir_to_player * EVADE_TRACK_WEIGHT
            + behavior.evade_offset * EVADE_OFFSET_WEIGHT)
            .normalize_or_zero(),
    };

    // Facing always keeps partial track of the player, whatever the state.
    let look_direction = (move_direction * LOOK_MOVE_WEIGHT + dir_to_player * LOOK_TRACK_WEIGHT)
        .normalize_or_zero();

    Steering {
        move_direction,
        look_direction,
    }
}

/// Close straight in from range, then orbit between the orbit and hold radii.
fn pursue_direction(distance: f64, dir_to_player: DVec3) -> DVec3 {
    if distance > PURSUE_ORBIT_RADIUS {
        return dir_to_player;
    }

    // Tangent is undefined directly above or below the player.
    let tangent = dir_to_player
        .cross(DVec3::Y)
        .try_normalize()
        .unwrap_or(DVec3::X);
    let radial_sign = if distance > PURSUE_HOLD_RADIUS { 1.0 } else { -1.0 };

    (tangent * PURSUE_TANGENT_WEIGHT + dir_to_player * PURSUE_RADIAL_WEIGHT * radial_sign)
        .normalize_or_zero()
}
