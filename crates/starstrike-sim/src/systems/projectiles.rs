//! Projectile advancement and collision.
//!
//! Each owner's bolts are tested against the targets listed by
//! [`Owner::hit_targets`], in order; the first hit consumes the bolt. Once
//! the structure is destroyed player bolts stop colliding, and once the
//! player is down enemy bolts do too.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;

use starstrike_core::components::{Enemy, PlayerShip, Projectile, TargetStructure};
use starstrike_core::constants::*;
use starstrike_core::enums::{EffectKind, HitTarget, Owner, SoundCue};
use starstrike_core::events::AudioEvent;
use starstrike_core::types::{Transform, VisualHandle};

use crate::registry;
use crate::session::ScoreState;
use crate::world_setup;

/// What a bolt struck.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Hit {
    Structure,
    Enemy(Entity),
    Player,
}

/// End-of-pass integrity results for the progression check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub structure_destroyed: bool,
    pub player_destroyed: bool,
}

/// Advance and collide every projectile owned by `owner`.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    owner: Owner,
    player: &mut PlayerShip,
    target: &mut TargetStructure,
    rng: &mut R,
    now_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
    removed_visuals: &mut Vec<VisualHandle>,
) -> CollisionOutcome {
    despawn_buffer.clear();

    // Enemy positions as of the start of the pass. Killed enemies are
    // dropped from this list so no two bolts hit the same one.
    let mut enemies: Vec<(Entity, DVec3)> = if owner == Owner::Player {
        world
            .query::<(&Transform, &Enemy)>()
            .iter()
            .map(|(e, (t, _))| (e, t.position))
            .collect()
    } else {
        Vec::new()
    };

    let mut bursts: Vec<(EffectKind, DVec3)> = Vec::new();

    for (entity, (transform, projectile)) in world.query_mut::<(&mut Transform, &mut Projectile)>() {
        if projectile.owner != owner {
            continue;
        }

        transform.position += projectile.direction * LASER_SPEED;
        let position = transform.position;

        let suspended = match owner {
            Owner::Player => target.destroyed,
            Owner::Enemy => player.integrity == 0,
        };
        let hit = if suspended {
            None
        } else {
            owner
                .hit_targets()
                .iter()
                .find_map(|&t| test_hit(t, position, player, target, &enemies))
        };

        match hit {
            Some(Hit::Structure) => {
                target.integrity = target.integrity.saturating_sub(TARGET_HIT_DAMAGE);
                score.structure_hits += 1;
                bursts.push((EffectKind::HitFlash, position));
                audio_events.push(AudioEvent::play(SoundCue::StructureHit));
                log::debug!("structure hit, integrity {}", target.integrity);
                if target.integrity == 0 {
                    target.destroyed = true;
                }
                despawn_buffer.push(entity);
            }
            Some(Hit::Enemy(enemy)) => {
                if let Some(i) = enemies.iter().position(|(e, _)| *e == enemy) {
                    let (_, enemy_position) = enemies.swap_remove(i);
                    bursts.push((EffectKind::EnemyExplosion, enemy_position));
                }
                despawn_buffer.push(enemy);
                score.enemies_destroyed += 1;
                audio_events.push(AudioEvent::play(SoundCue::EnemyExplosion));
                log::debug!("enemy {} destroyed", enemy.id());
                despawn_buffer.push(entity);
            }
            Some(Hit::Player) => {
                player.integrity = player.integrity.saturating_sub(PLAYER_HIT_DAMAGE);
                score.hits_taken += 1;
                bursts.push((EffectKind::HitFlash, position));
                audio_events.push(AudioEvent::play(SoundCue::PlayerHit));
                log::debug!("player hit, integrity {}", player.integrity);
                despawn_buffer.push(entity);
            }
            None => {
                projectile.lifetime = projectile.lifetime.saturating_sub(1);
                if projectile.lifetime == 0 {
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    registry::despawn_buffered(world, despawn_buffer, removed_visuals);

    for (kind, position) in bursts {
        world_setup::spawn_effect(world, rng, kind, position, now_ms);
    }

    CollisionOutcome {
        structure_destroyed: target.destroyed,
        player_destroyed: player.integrity == 0,
    }
}

/// Sphere test of a bolt position against one collision target.
fn test_hit(
    target_kind: HitTarget,
    position: DVec3,
    player: &PlayerShip,
    target: &TargetStructure,
    enemies: &[(Entity, DVec3)],
) -> Option<Hit> {
    match target_kind {
        HitTarget::Structure => (!target.destroyed
            && position.distance(target.transform.position) < TARGET_RADIUS)
            .then_some(Hit::Structure),
        HitTarget::Enemies => enemies
            .iter()
            .find(|(_, p)| position.distance(*p) < ENEMY_HIT_RADIUS)
            .map(|(e, _)| Hit::Enemy(*e)),
        HitTarget::Player => {
            (position.distance(player.transform.position) < PLAYER_HIT_RADIUS).then_some(Hit::Player)
        }
    }
}
