//! Entity factories and session defaults.
//!
//! Creates the player and target singletons and spawns enemy, projectile and
//! effect entities with their component bundles.

use std::f64::consts::TAU;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;

use starstrike_core::components::*;
use starstrike_core::config::Tuning;
use starstrike_core::constants::*;
use starstrike_core::enums::{EffectKind, Owner};
use starstrike_core::profiles::explosion_profile;
use starstrike_core::types::Transform;

use starstrike_fighter_ai::fsm::roll_ticks;
use starstrike_fighter_ai::gunnery::roll_fire_interval;

/// The player ship at the origin, facing the target structure.
pub fn fresh_player() -> PlayerShip {
    PlayerShip {
        transform: Transform::at(DVec3::ZERO),
        velocity: DVec3::ZERO,
        rotation_rate: DVec3::ZERO,
        speed: PLAYER_INITIAL_SPEED,
        integrity: PLAYER_MAX_INTEGRITY,
        laser_cooldown: 0,
    }
}

/// The target structure at full integrity.
pub fn fresh_target() -> TargetStructure {
    TargetStructure {
        transform: Transform::at(TARGET_POSITION),
        integrity: TARGET_MAX_INTEGRITY,
        destroyed: false,
    }
}

/// Build an enemy with rolled speed and fire interval.
pub fn roll_enemy<R: Rng + ?Sized>(
    rng: &mut R,
    tuning: &Tuning,
    (speed_min, speed_max): (f64, f64),
    behavior: Behavior,
) -> Enemy {
    Enemy {
        speed: rng.gen_range(speed_min..=speed_max),
        behavior,
        last_fire_ms: None,
        fire_interval_ms: roll_fire_interval(rng, tuning),
    }
}

/// Ambient spawn: somewhere on the annulus around the target, facing the
/// player, with a random initial pursue timer.
pub fn spawn_ambient_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player_position: DVec3,
) -> Entity {
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(AMBIENT_SPAWN_RADIUS.0..=AMBIENT_SPAWN_RADIUS.1);
    let height = rng.gen_range(-AMBIENT_SPAWN_HEIGHT_JITTER..=AMBIENT_SPAWN_HEIGHT_JITTER);
    let position = TARGET_POSITION + DVec3::new(angle.cos() * radius, height, angle.sin() * radius);

    let behavior = Behavior::pursue(roll_ticks(rng, ENEMY_INITIAL_TIMER));
    let enemy = roll_enemy(rng, tuning, tuning.ambient_speed, behavior);
    spawn_enemy(world, position, player_position, enemy)
}

/// Encounter spawn: ahead of the player towards the target, scattered, in
/// forced pursuit.
pub fn spawn_encounter_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player_position: DVec3,
) -> Entity {
    let ahead = (TARGET_POSITION - player_position).normalize_or_zero();
    let scatter = DVec3::new(
        rng.gen_range(-ENCOUNTER_SPAWN_SCATTER..=ENCOUNTER_SPAWN_SCATTER),
        rng.gen_range(-ENCOUNTER_SPAWN_SCATTER..=ENCOUNTER_SPAWN_SCATTER),
        rng.gen_range(-ENCOUNTER_SPAWN_SCATTER..=ENCOUNTER_SPAWN_SCATTER),
    );
    let position = player_position + ahead * ENCOUNTER_SPAWN_DISTANCE + scatter;

    let behavior = Behavior::pursue(roll_ticks(rng, ENCOUNTER_PURSUE_TIMER));
    let enemy = roll_enemy(rng, tuning, tuning.encounter_speed, behavior);
    spawn_enemy(world, position, player_position, enemy)
}

/// Spawn an enemy at `position` facing `facing_point`.
pub fn spawn_enemy(world: &mut World, position: DVec3, facing_point: DVec3, enemy: Enemy) -> Entity {
    let transform = Transform::looking_along(position, facing_point - position);
    world.spawn((transform, enemy))
}

/// Spawn a laser bolt travelling along `direction`.
pub fn spawn_projectile(world: &mut World, owner: Owner, position: DVec3, direction: DVec3) -> Entity {
    let direction = direction.normalize_or_zero();
    world.spawn((
        Transform::looking_along(position, direction),
        Projectile {
            owner,
            direction,
            lifetime: LASER_LIFETIME,
        },
    ))
}

/// Spawn an effect using its kind's default particle count and radius.
pub fn spawn_effect<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    kind: EffectKind,
    origin: DVec3,
    now_ms: f64,
) -> Entity {
    let profile = explosion_profile(kind);
    spawn_burst(
        world,
        rng,
        kind,
        origin,
        now_ms,
        profile.particle_count,
        profile.radius,
    )
}

/// Spawn a particle burst with an explicit size.
///
/// Particles start uniformly distributed in direction at a random fraction
/// of `radius` and fly radially outwards at a speed from the kind's profile.
pub fn spawn_burst<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    kind: EffectKind,
    origin: DVec3,
    now_ms: f64,
    particle_count: usize,
    radius: f64,
) -> Entity {
    let profile = explosion_profile(kind);

    let particles = (0..particle_count)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let phi = (2.0 * rng.gen::<f64>() - 1.0).clamp(-1.0, 1.0).acos();
            let outward = DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            let distance = rng.gen::<f64>() * radius;
            let speed = rng.gen_range(profile.speed_min..=profile.speed_max);
            Particle {
                offset: outward * distance,
                velocity: outward * speed,
            }
        })
        .collect();

    let effect = Effect {
        kind,
        particles,
        age: 0,
        lifetime: profile.lifetime_ticks,
        fade_ticks: profile.fade_ticks,
        light: PointLight {
            intensity: profile.light_intensity,
            fade_step: profile.light_fade_step,
            fade_interval_ms: profile.light_fade_interval_ms,
            next_fade_ms: now_ms + profile.light_fade_interval_ms,
        },
    };

    world.spawn((Transform::at(origin), effect))
}

/// Random offset of up to a quarter of `radius` on each axis.
pub fn secondary_offset<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> DVec3 {
    let spread = radius * 0.5;
    DVec3::new(
        (rng.gen::<f64>() - 0.5) * spread,
        (rng.gen::<f64>() - 0.5) * spread,
        (rng.gen::<f64>() - 0.5) * spread,
    )
}
