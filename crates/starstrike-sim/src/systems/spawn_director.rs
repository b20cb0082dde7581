//! Spawn director: ambient spawns on a wall-clock timer and approach
//! encounters keyed to the player's distance from the target.
//!
//! Both sources respect the population cap.

use hecs::World;
use rand::Rng;

use starstrike_core::components::PlayerShip;
use starstrike_core::config::Tuning;
use starstrike_core::constants::*;
use starstrike_core::enums::SoundCue;
use starstrike_core::events::AudioEvent;

use crate::registry;
use crate::session::Session;
use crate::systems::player_flight::distance_to_target;
use crate::world_setup;

/// Run both spawn sources for one tick.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player: &PlayerShip,
    session: &mut Session,
    now_ms: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    spawn_ambient(world, rng, tuning, player, session, now_ms);
    spawn_encounter(world, rng, tuning, player, session, audio_events);
}

/// One enemy per interval while below the cap. The timer only restarts when
/// an enemy actually spawns.
fn spawn_ambient<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player: &PlayerShip,
    session: &mut Session,
    now_ms: f64,
) {
    let Some(due_ms) = session.next_ambient_ms else {
        return;
    };
    if now_ms < due_ms || registry::enemy_count(world) >= tuning.enemy_cap {
        return;
    }

    let entity = world_setup::spawn_ambient_enemy(world, rng, tuning, player.transform.position);
    session.next_ambient_ms = Some(now_ms + tuning.ambient_spawn_interval_ms);
    log::debug!("ambient enemy {} spawned", entity.id());
}

/// Trigger at most one encounter threshold per tick.
fn spawn_encounter<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    tuning: &Tuning,
    player: &PlayerShip,
    session: &mut Session,
    audio_events: &mut Vec<AudioEvent>,
) {
    if session.encounters.is_exhausted() {
        return;
    }
    let Some((index, threshold)) = session.encounters.peek() else {
        return;
    };
    let distance = distance_to_target(player);
    if distance > threshold + tuning.encounter_window {
        return;
    }
    session.encounters.consume();

    let headroom = tuning
        .enemy_cap
        .saturating_sub(registry::enemy_count(world));
    let count = (ENCOUNTER_BASE_COUNT + index)
        .min(ENCOUNTER_MAX_COUNT)
        .min(headroom);

    for _ in 0..count {
        world_setup::spawn_encounter_enemy(world, rng, tuning, player.transform.position);
    }
    if count > 0 {
        audio_events.push(AudioEvent::play(SoundCue::EncounterAlarm));
    }
    log::info!(
        "encounter {} at {:.0} units: {} enemies",
        index,
        threshold,
        count
    );
}
