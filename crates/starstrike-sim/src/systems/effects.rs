//! Visual effects: particle integration, opacity fade and light fade.
//!
//! Runs every tick in every phase. Effects never touch game-rule state.

use hecs::{Entity, World};

use starstrike_core::components::Effect;
use starstrike_core::types::VisualHandle;

use crate::registry;

/// Advance every effect one tick and remove the finished ones.
pub fn run(
    world: &mut World,
    now_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
    removed_visuals: &mut Vec<VisualHandle>,
) {
    despawn_buffer.clear();

    for (entity, effect) in world.query_mut::<&mut Effect>() {
        if effect.age < effect.lifetime {
            for particle in &mut effect.particles {
                particle.offset += particle.velocity;
            }
            effect.age += 1;
        }
        if effect.age >= effect.lifetime {
            effect.particles.clear();
        }

        let light = &mut effect.light;
        while light.intensity > 0.0 && light.fade_step > 0.0 && now_ms >= light.next_fade_ms {
            light.intensity = (light.intensity - light.fade_step).max(0.0);
            light.next_fade_ms += light.fade_interval_ms;
        }

        if effect.particles.is_empty() && effect.light.intensity <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    registry::despawn_buffered(world, despawn_buffer, removed_visuals);
}

/// Particle opacity: 1 until the final `fade_ticks` of lifetime, then a
/// linear ramp to 0.
pub fn opacity(effect: &Effect) -> f64 {
    if effect.age >= effect.lifetime {
        return 0.0;
    }
    let remaining = effect.lifetime - effect.age;
    if effect.fade_ticks == 0 || remaining >= effect.fade_ticks {
        1.0
    } else {
        remaining as f64 / effect.fade_ticks as f64
    }
}
