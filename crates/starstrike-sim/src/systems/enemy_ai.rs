//! Enemy fighter system: behavior FSM, steering and fire, once per enemy
//! per tick.

use glam::DVec3;
use hecs::World;
use rand::Rng;

use starstrike_core::components::{Enemy, PlayerShip};
use starstrike_core::config::Tuning;
use starstrike_core::enums::{Owner, SoundCue};
use starstrike_core::events::AudioEvent;
use starstrike_core::types::{look_rotation, Transform};

use starstrike_fighter_ai::fsm;
use starstrike_fighter_ai::gunnery::{self, FireContext};
use starstrike_fighter_ai::steering;

use crate::world_setup;

/// Update every enemy and spawn the shots they take.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player: &PlayerShip,
    now_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    let player_position = player.transform.position;
    let mut shots: Vec<(DVec3, DVec3)> = Vec::new();

    for (entity, (transform, enemy)) in world.query_mut::<(&mut Transform, &mut Enemy)>() {
        let distance = transform.distance_to(player_position);
        let dir_to_player = transform.direction_to(player_position);

        let update = fsm::evaluate(&enemy.behavior, distance, dir_to_player, tuning, rng);
        if update.state_changed {
            log::trace!(
                "enemy {}: {:?} -> {:?}",
                entity.id(),
                enemy.behavior.state,
                update.behavior.state
            );
        }
        enemy.behavior = update.behavior;

        let steer = steering::steer(&enemy.behavior, distance, dir_to_player);
        transform.position += steer.move_direction * enemy.speed;
        if steer.look_direction != DVec3::ZERO {
            transform.orientation = look_rotation(steer.look_direction);
        }

        let ctx = FireContext {
            state: enemy.behavior.state,
            distance,
            now_ms,
            last_fire_ms: enemy.last_fire_ms,
            fire_interval_ms: enemy.fire_interval_ms,
        };
        if gunnery::should_fire(&ctx, tuning, rng) {
            enemy.last_fire_ms = Some(now_ms);
            shots.push((transform.position, player_position - transform.position));
        }
    }

    for (origin, aim) in shots {
        world_setup::spawn_projectile(world, Owner::Enemy, origin, aim);
        audio_events.push(AudioEvent::play(SoundCue::EnemyLaser));
    }
}
