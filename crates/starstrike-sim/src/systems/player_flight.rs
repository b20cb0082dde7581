//! Player ship flight model and laser trigger.

use glam::DQuat;
use hecs::World;

use starstrike_core::commands::ActionSet;
use starstrike_core::components::PlayerShip;
use starstrike_core::constants::*;
use starstrike_core::enums::{Owner, SoundCue};
use starstrike_core::events::AudioEvent;

use crate::session::ScoreState;
use crate::world_setup;

/// Integrate one tick of player flight from the held actions.
pub fn run(player: &mut PlayerShip, actions: &ActionSet) {
    let mut speed = player.speed;
    if actions.speed_up {
        speed += PLAYER_ACCELERATION;
    }
    if actions.speed_down {
        speed -= PLAYER_DECELERATION;
    }
    player.speed = speed.clamp(0.0, PLAYER_MAX_SPEED);

    let thrust = player.transform.forward() * player.speed;
    player.velocity = player.velocity * VELOCITY_DAMPING + thrust;
    player.transform.position += player.velocity;

    let mut rate = player.rotation_rate;
    if actions.yaw_left {
        rate.y += PLAYER_TURN_SPEED;
    }
    if actions.yaw_right {
        rate.y -= PLAYER_TURN_SPEED;
    }
    if actions.pitch_up {
        rate.x += PLAYER_PITCH_SPEED;
    }
    if actions.pitch_down {
        rate.x -= PLAYER_PITCH_SPEED;
    }
    rate *= ROTATION_DAMPING;
    player.rotation_rate = rate;

    // Local-space rotation: pitch about X first, then yaw about Y.
    player.transform.orientation = (player.transform.orientation
        * DQuat::from_rotation_x(rate.x)
        * DQuat::from_rotation_y(rate.y))
    .normalize();
}

/// Fire all four wingtip lasers if the trigger is held and the cooldown has
/// run out, then count the cooldown down. Returns whether a volley was fired.
pub fn fire_lasers(
    world: &mut World,
    player: &mut PlayerShip,
    trigger_held: bool,
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
) -> bool {
    let fired = trigger_held && player.laser_cooldown == 0;

    if fired {
        let direction = player.transform.forward();
        for mount in WINGTIP_HARDPOINTS.all() {
            let muzzle = player.transform.position + player.transform.orientation * mount;
            world_setup::spawn_projectile(world, Owner::Player, muzzle, direction);
        }
        player.laser_cooldown = LASER_COOLDOWN;
        score.shots_fired += 1;
        audio_events.push(AudioEvent::play(SoundCue::PlayerLaser));
    }

    player.laser_cooldown = player.laser_cooldown.saturating_sub(1);
    fired
}

/// S-foil opening angle for the current speed.
pub fn wing_angle(speed: f64) -> f64 {
    (speed * WING_ANGLE_PER_SPEED).min(WING_ANGLE_MAX)
}

/// Distance from the player to the target structure.
pub fn distance_to_target(player: &PlayerShip) -> f64 {
    player.transform.distance_to(TARGET_POSITION)
}

