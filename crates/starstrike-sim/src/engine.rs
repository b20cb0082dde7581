//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs registry, the player and target
//! singletons, session state and the scheduled-event queue. It processes
//! commands, runs every system in a fixed order, drives the presentation
//! adapter and produces a `GameStateSnapshot` per tick. It never blocks and
//! never fails; deterministic for a given seed and input sequence.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::commands::{ActionSet, FrameInput, PlayerCommand};
use starstrike_core::components::{PlayerShip, TargetStructure};
use starstrike_core::config::Tuning;
use starstrike_core::constants::*;
use starstrike_core::enums::{EffectKind, GamePhase, Overlay, Owner, SoundCue};
use starstrike_core::events::AudioEvent;
use starstrike_core::profiles::explosion_profile;
use starstrike_core::state::GameStateSnapshot;
use starstrike_core::types::SimTime;

use crate::presentation::{NullPresentation, Presentation};
use crate::progression::{Progression, Transition};
use crate::registry;
use crate::schedule::{EventQueue, ScheduledAction};
use crate::session::{ScoreState, Session};
use crate::systems;
use crate::systems::presentation_sync::{SceneBindings, SceneState};
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. One per game; sessions restart in place.
pub struct SimulationEngine<P: Presentation = NullPresentation> {
    world: World,
    time: SimTime,
    progression: Progression,
    overlay: Overlay,
    tuning: Tuning,
    rng: ChaCha8Rng,
    player: PlayerShip,
    target: TargetStructure,
    session: Session,
    schedule: EventQueue,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    bindings: SceneBindings,
    presentation: P,
}

impl SimulationEngine<NullPresentation> {
    /// Headless engine.
    pub fn new(config: SimConfig) -> Self {
        Self::with_presentation(config, NullPresentation::default())
    }
}

impl<P: Presentation> SimulationEngine<P> {
    /// Engine driving the given presentation adapter.
    ///
    /// Tuning that fails validation is replaced by the defaults.
    pub fn with_presentation(config: SimConfig, presentation: P) -> Self {
        let tuning = match config.tuning.validate() {
            Ok(()) => config.tuning,
            Err(err) => {
                log::warn!("invalid tuning ({err}), using defaults");
                Tuning::default()
            }
        };

        Self {
            world: World::new(),
            time: SimTime::default(),
            progression: Progression::default(),
            overlay: Overlay::StartScreen,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: world_setup::fresh_player(),
            target: world_setup::fresh_target(),
            session: Session::begin(&tuning, 0.0),
            tuning,
            schedule: EventQueue::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            bindings: SceneBindings::default(),
            presentation,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn start_game(&mut self) {
        self.queue_command(PlayerCommand::StartGame);
    }

    pub fn restart_game(&mut self) {
        self.queue_command(PlayerCommand::RestartGame);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self, input: FrameInput) -> GameStateSnapshot {
        self.time.advance(input.dt_ms);
        self.process_commands();

        if self.progression.phase() == GamePhase::Play {
            self.run_play_systems(&input.actions);
        }
        self.run_scene_systems();

        systems::presentation_sync::run(
            &mut self.world,
            &SceneState {
                player: &self.player,
                target: &self.target,
                overlay: self.overlay,
                audio_events: &self.audio_events,
            },
            &mut self.bindings,
            &mut self.presentation,
        );

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.progression.phase(),
            self.progression.generation(),
            &self.player,
            &self.target,
            &self.session,
            self.overlay,
            audio_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.progression.phase()
    }

    /// Session generation; bumps on every start or restart.
    pub fn generation(&self) -> u64 {
        self.progression.generation()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player(&self) -> &PlayerShip {
        &self.player
    }

    pub fn target(&self) -> &TargetStructure {
        &self.target
    }

    pub fn score(&self) -> &ScoreState {
        &self.session.score
    }

    /// Session time of the next ambient spawn, `None` once halted.
    pub fn next_ambient_spawn_ms(&self) -> Option<f64> {
        self.session.next_ambient_ms
    }

    /// Scheduled events still pending.
    pub fn pending_events(&self) -> usize {
        self.schedule.len()
    }

    /// Read-only view of the entity registry.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable registry access for scripted scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable player access for scripted scenarios.
    pub fn player_mut(&mut self) -> &mut PlayerShip {
        &mut self.player
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands illegal in the current phase are
    /// ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        let transition = match command {
            PlayerCommand::StartGame => Transition::Start,
            PlayerCommand::RestartGame => Transition::Restart,
        };
        if self.progression.apply(transition) {
            self.begin_session();
        }
    }

    /// Side effects of entering Play: fresh pools, positions and entity
    /// lists, encounters rearmed, spawn timer baseline set to now.
    fn begin_session(&mut self) {
        registry::clear(&mut self.world, &mut self.bindings.removed);
        self.schedule.clear();
        self.player = world_setup::fresh_player();
        self.target = world_setup::fresh_target();
        self.session = Session::begin(&self.tuning, self.time.now_ms);
        self.overlay = Overlay::None;
        self.audio_events.push(AudioEvent::play(SoundCue::EngineLoop));
        log::info!("session {} started", self.progression.generation());
    }

    /// Run the gameplay systems in order. Stops as soon as the phase leaves
    /// Play.
    fn run_play_systems(&mut self, actions: &ActionSet) {
        let now_ms = self.time.now_ms;

        // 1. Player flight and trigger
        systems::player_flight::run(&mut self.player, actions);
        systems::player_flight::fire_lasers(
            &mut self.world,
            &mut self.player,
            actions.fire,
            &mut self.audio_events,
            &mut self.session.score,
        );

        // 2. Player bolts
        systems::projectiles::run(
            &mut self.world,
            Owner::Player,
            &mut self.player,
            &mut self.target,
            &mut self.rng,
            now_ms,
            &mut self.audio_events,
            &mut self.session.score,
            &mut self.despawn_buffer,
            &mut self.bindings.removed,
        );
        if !self.check_progression() {
            return;
        }

        // 3. Spawn director
        systems::spawn_director::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            &self.player,
            &mut self.session,
            now_ms,
            &mut self.audio_events,
        );

        // 4. Enemy AI
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            &self.player,
            now_ms,
            &mut self.audio_events,
        );

        // 5. Enemy bolts
        systems::projectiles::run(
            &mut self.world,
            Owner::Enemy,
            &mut self.player,
            &mut self.target,
            &mut self.rng,
            now_ms,
            &mut self.audio_events,
            &mut self.session.score,
            &mut self.despawn_buffer,
            &mut self.bindings.removed,
        );

        // 6. Progression
        self.check_progression();
    }

    /// Systems that run in every phase: structure spin, effects and due
    /// scheduled events.
    fn run_scene_systems(&mut self) {
        systems::structure::run(&mut self.target);
        systems::effects::run(
            &mut self.world,
            self.time.now_ms,
            &mut self.despawn_buffer,
            &mut self.bindings.removed,
        );

        let due = self
            .schedule
            .drain_due(self.time.now_ms, self.progression.generation());
        for action in due {
            self.fire_scheduled(action);
        }
    }

    /// Apply end-of-game transitions from the integrity pools. Returns
    /// whether the session is still in play.
    fn check_progression(&mut self) -> bool {
        if self.target.destroyed {
            self.enter_victory();
        } else if self.player.integrity == 0 {
            self.enter_game_over();
        }
        self.progression.phase() == GamePhase::Play
    }

    fn enter_victory(&mut self) {
        if !self.progression.apply(Transition::Victory) {
            return;
        }
        let now_ms = self.time.now_ms;
        let generation = self.progression.generation();
        let origin = self.target.transform.position;

        self.target.destroyed = true;
        world_setup::spawn_effect(
            &mut self.world,
            &mut self.rng,
            EffectKind::StructureExplosion,
            origin,
            now_ms,
        );

        let profile = explosion_profile(EffectKind::StructureExplosion);
        let secondaries = SECONDARY_EXPLOSION_DELAYS_MS
            .into_iter()
            .zip(SECONDARY_EXPLOSION_DIVISORS)
            .zip(SECONDARY_EXPLOSION_SCALES);
        for ((delay_ms, divisor), scale) in secondaries {
            self.schedule.schedule(
                now_ms + delay_ms,
                generation,
                ScheduledAction::SecondaryExplosion {
                    origin,
                    particle_count: profile.particle_count / divisor,
                    radius: profile.radius * scale,
                },
            );
        }
        self.schedule.schedule(
            now_ms + VICTORY_REVEAL_DELAY_MS,
            generation,
            ScheduledAction::RevealVictory,
        );

        self.audio_events.push(AudioEvent::play(SoundCue::StructureExplosion));
        self.audio_events.push(AudioEvent::stop(SoundCue::EngineLoop));
        log::info!("target structure destroyed, session {generation} won");
    }

    fn enter_game_over(&mut self) {
        if !self.progression.apply(Transition::GameOver) {
            return;
        }
        self.overlay = Overlay::GameOver;
        self.session.next_ambient_ms = None;
        self.audio_events.push(AudioEvent::stop(SoundCue::EngineLoop));
        self.audio_events.push(AudioEvent::play(SoundCue::GameOver));
        log::info!(
            "player destroyed, session {} lost",
            self.progression.generation()
        );
    }

    fn fire_scheduled(&mut self, action: ScheduledAction) {
        match action {
            ScheduledAction::SecondaryExplosion {
                origin,
                particle_count,
                radius,
            } => {
                let origin = origin + world_setup::secondary_offset(&mut self.rng, radius);
                world_setup::spawn_burst(
                    &mut self.world,
                    &mut self.rng,
                    EffectKind::SecondaryExplosion,
                    origin,
                    self.time.now_ms,
                    particle_count,
                    radius,
                );
                self.audio_events.push(AudioEvent::play(SoundCue::StructureExplosion));
            }
            ScheduledAction::RevealVictory => {
                self.overlay = Overlay::Victory;
                self.audio_events.push(AudioEvent::play(SoundCue::Victory));
                log::info!("victory revealed");
            }
        }
    }
}
