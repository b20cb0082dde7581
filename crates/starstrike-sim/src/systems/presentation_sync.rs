//! Presentation sync: mirrors registry and singleton state onto the host's
//! [`Presentation`] once per tick.
//!
//! Entities without a [`Visual`] get one created; entities with one get
//! updated; handles of despawned entities are removed. Audio events, HUD
//! readouts and overlay changes are forwarded here as well.

use hecs::{Entity, World};

use starstrike_core::components::*;
use starstrike_core::constants::*;
use starstrike_core::enums::{HudField, Overlay, VisualKind};
use starstrike_core::events::AudioEvent;
use starstrike_core::types::{Transform, VisualHandle};

use crate::presentation::{EffectFrame, Presentation};
use crate::registry;
use crate::systems::{effects, player_flight};

/// Host-side bindings that outlive individual ticks.
#[derive(Debug, Default)]
pub struct SceneBindings {
    player: Option<VisualHandle>,
    target: Option<VisualHandle>,
    target_visible: bool,
    overlay: Option<Overlay>,
    /// Visuals of entities despawned since the last sync.
    pub removed: Vec<VisualHandle>,
}

/// Everything the sync needs beyond the registry.
pub struct SceneState<'a> {
    pub player: &'a PlayerShip,
    pub target: &'a TargetStructure,
    pub overlay: Overlay,
    pub audio_events: &'a [AudioEvent],
}

/// Push this tick's state to the presentation layer.
pub fn run<P: Presentation + ?Sized>(
    world: &mut World,
    scene: &SceneState<'_>,
    bindings: &mut SceneBindings,
    presentation: &mut P,
) {
    for handle in bindings.removed.drain(..) {
        presentation.remove_visual(handle);
    }

    sync_singletons(scene, bindings, presentation);
    sync_entities(world, presentation);

    for event in scene.audio_events {
        match *event {
            AudioEvent::Play { cue } => presentation.play_sound(cue),
            AudioEvent::Stop { cue } => presentation.stop_sound(cue),
        }
    }

    let enemy_count = registry::enemy_count(world);
    for (field, value) in hud_readouts(scene.player, scene.target, enemy_count) {
        presentation.update_hud(field, value);
    }

    if bindings.overlay != Some(scene.overlay) {
        presentation.show_overlay(scene.overlay);
        bindings.overlay = Some(scene.overlay);
    }
}

fn sync_singletons<P: Presentation + ?Sized>(
    scene: &SceneState<'_>,
    bindings: &mut SceneBindings,
    presentation: &mut P,
) {
    let player_transform = &scene.player.transform;
    match bindings.player {
        Some(handle) => presentation.update_visual(handle, player_transform),
        None => {
            bindings.player = Some(presentation.spawn_visual(VisualKind::PlayerShip, player_transform));
        }
    }

    let target_transform = &scene.target.transform;
    let handle = match bindings.target {
        Some(handle) => {
            presentation.update_visual(handle, target_transform);
            handle
        }
        None => {
            let handle = presentation.spawn_visual(VisualKind::TargetStructure, target_transform);
            bindings.target = Some(handle);
            bindings.target_visible = true;
            handle
        }
    };

    // Destroyed structures stay in the scene, hidden.
    let visible = !scene.target.destroyed;
    if visible != bindings.target_visible {
        presentation.set_visible(handle, visible);
        bindings.target_visible = visible;
    }
}

fn sync_entities<P: Presentation + ?Sized>(world: &mut World, presentation: &mut P) {
    let mut new_bindings: Vec<(Entity, VisualHandle)> = Vec::new();

    for (entity, (transform, visual, enemy, projectile, effect)) in world
        .query::<(
            &Transform,
            Option<&Visual>,
            Option<&Enemy>,
            Option<&Projectile>,
            Option<&Effect>,
        )>()
        .iter()
    {
        let kind = match (enemy, projectile, effect) {
            (Some(_), _, _) => VisualKind::EnemyFighter,
            (_, Some(p), _) => VisualKind::laser(p.owner),
            (_, _, Some(e)) => VisualKind::Effect(e.kind),
            _ => continue,
        };

        let handle = match visual {
            Some(v) => v.0,
            None => {
                let handle = presentation.spawn_visual(kind, transform);
                new_bindings.push((entity, handle));
                handle
            }
        };

        match effect {
            Some(e) => presentation.update_effect(
                handle,
                &EffectFrame {
                    origin: transform.position,
                    particles: &e.particles,
                    opacity: effects::opacity(e),
                    light_intensity: e.light.intensity,
                },
            ),
            None => presentation.update_visual(handle, transform),
        }
    }

    for (entity, handle) in new_bindings {
        if world.insert_one(entity, Visual(handle)).is_err() {
            presentation.remove_visual(handle);
        }
    }
}

/// Current HUD values.
pub fn hud_readouts(
    player: &PlayerShip,
    target: &TargetStructure,
    enemy_count: usize,
) -> [(HudField, f64); 6] {
    [
        (HudField::SpeedPercent, player.speed * 100.0 / PLAYER_MAX_SPEED),
        (
            HudField::TargetDistance,
            player_flight::distance_to_target(player),
        ),
        (
            HudField::PlayerIntegrityPercent,
            player.integrity as f64 * 100.0 / PLAYER_MAX_INTEGRITY as f64,
        ),
        (
            HudField::TargetIntegrityPercent,
            target.integrity as f64 * 100.0 / TARGET_MAX_INTEGRITY as f64,
        ),
        (HudField::EnemyCount, enemy_count as f64),
        (HudField::WingAngle, player_flight::wing_angle(player.speed)),
    ]
}
