//! Entity registry helpers over the hecs world.
//!
//! Despawning goes through here so that any presentation visual bound to the
//! entity is queued for removal.

use hecs::{Entity, World};

use starstrike_core::components::{Enemy, Visual};
use starstrike_core::types::VisualHandle;

/// Despawn every buffered entity, collecting their visual handles.
pub fn despawn_buffered(
    world: &mut World,
    buffer: &mut Vec<Entity>,
    removed_visuals: &mut Vec<VisualHandle>,
) {
    for entity in buffer.drain(..) {
        despawn(world, entity, removed_visuals);
    }
}

/// Despawn one entity. Already-dead entities are ignored.
pub fn despawn(world: &mut World, entity: Entity, removed_visuals: &mut Vec<VisualHandle>) {
    let handle = world.get::<&Visual>(entity).ok().map(|v| v.0);
    if world.despawn(entity).is_ok() {
        removed_visuals.extend(handle);
    }
}

/// Remove every entity (session reset).
pub fn clear(world: &mut World, removed_visuals: &mut Vec<VisualHandle>) {
    removed_visuals.extend(world.query_mut::<&Visual>().into_iter().map(|(_, v)| v.0));
    world.clear();
}

/// Live enemy fighters.
pub fn enemy_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}
