//! Per-tick snapshot of everything a host can observe about a session.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Session generation; bumps on every start or restart.
    pub generation: u64,
    pub player: PlayerView,
    pub target: TargetView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    /// Encounter distances not yet triggered this session.
    pub encounters_remaining: Vec<f64>,
    pub overlay: Overlay,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub orientation: DQuat,
    pub velocity: DVec3,
    pub speed: f64,
    pub integrity: u32,
    pub laser_cooldown: u32,
    pub distance_to_target: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub position: DVec3,
    pub orientation: DQuat,
    pub integrity: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Registry id, stable for the enemy's lifetime.
    pub id: u32,
    pub position: DVec3,
    pub orientation: DQuat,
    pub state: BehaviorState,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: Owner,
    pub position: DVec3,
    pub direction: DVec3,
    pub lifetime: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: DVec3,
    pub particle_count: usize,
    pub opacity: f64,
    pub light_intensity: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_destroyed: u32,
    pub structure_hits: u32,
    pub shots_fired: u32,
    pub hits_taken: u32,
}
