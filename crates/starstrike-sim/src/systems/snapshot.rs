//! Snapshot system: reads the registry and singletons into a
//! `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use starstrike_core::components::*;
use starstrike_core::enums::{GamePhase, Overlay};
use starstrike_core::events::AudioEvent;
use starstrike_core::state::*;
use starstrike_core::types::{SimTime, Transform};

use crate::session::Session;
use crate::systems::{effects, player_flight};

/// Build a complete snapshot of the current tick.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    generation: u64,
    player: &PlayerShip,
    target: &TargetStructure,
    session: &Session,
    overlay: Overlay,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        generation,
        player: build_player(player),
        target: build_target(target),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        effects: build_effects(world),
        encounters_remaining: session.encounters.remaining().to_vec(),
        overlay,
        audio_events,
        score: session.score.view(),
    }
}

fn build_player(player: &PlayerShip) -> PlayerView {
    PlayerView {
        position: player.transform.position,
        orientation: player.transform.orientation,
        velocity: player.velocity,
        speed: player.speed,
        integrity: player.integrity,
        laser_cooldown: player.laser_cooldown,
        distance_to_target: player_flight::distance_to_target(player),
    }
}

fn build_target(target: &TargetStructure) -> TargetView {
    TargetView {
        position: target.transform.position,
        orientation: target.transform.orientation,
        integrity: target.integrity,
        destroyed: target.destroyed,
    }
}

/// Enemies sorted by registry id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Transform, &Enemy)>()
        .iter()
        .map(|(entity, (transform, enemy))| EnemyView {
            id: entity.id(),
            position: transform.position,
            orientation: transform.orientation,
            state: enemy.behavior.state,
            speed: enemy.speed,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Transform, &Projectile)>()
        .iter()
        .map(|(_, (transform, projectile))| ProjectileView {
            owner: projectile.owner,
            position: transform.position,
            direction: projectile.direction,
            lifetime: projectile.lifetime,
        })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Transform, &Effect)>()
        .iter()
        .map(|(_, (transform, effect))| EffectView {
            kind: effect.kind,
            position: transform.position,
            particle_count: effect.particles.len(),
            opacity: effects::opacity(effect),
            light_intensity: effect.light.intensity,
        })
        .collect()
}
