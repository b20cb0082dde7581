//! Simulation state records.
//!
//! `Enemy`, `Projectile` and `Effect` are hecs components attached alongside
//! a `Transform`. `PlayerShip` and `TargetStructure` are singletons owned
//! directly by the engine. Components are plain data; game logic lives in
//! systems.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Transform, VisualHandle};

/// The player's starfighter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub transform: Transform,
    /// Damped velocity accumulator (world units per tick).
    pub velocity: DVec3,
    /// Damped rotation-rate accumulator: x = pitch, y = yaw (radians per tick).
    pub rotation_rate: DVec3,
    /// Commanded speed, always within [0, PLAYER_MAX_SPEED].
    pub speed: f64,
    pub integrity: u32,
    /// Ticks until the lasers may fire again.
    pub laser_cooldown: u32,
}

/// The stationary target structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetStructure {
    pub transform: Transform,
    pub integrity: u32,
    /// Set once integrity reaches zero. The structure stays in the scene,
    /// hidden, until the next session.
    pub destroyed: bool,
}

/// Local-space laser mounts on the player ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hardpoints {
    pub upper_left: DVec3,
    pub upper_right: DVec3,
    pub lower_left: DVec3,
    pub lower_right: DVec3,
}

impl Hardpoints {
    pub fn all(&self) -> [DVec3; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
        ]
    }
}

/// Enemy fighter behavior and weapon state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Distance flown per tick.
    pub speed: f64,
    pub behavior: Behavior,
    /// Session time of the last shot, `None` until the first one.
    pub last_fire_ms: Option<f64>,
    /// Base interval between shots (ms), rolled at spawn.
    pub fire_interval_ms: f64,
}

/// Per-enemy FSM state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub state: BehaviorState,
    /// Ticks remaining before the next transition is evaluated.
    pub timer: u32,
    /// Frozen heading, meaningful only in `Strafe`.
    pub strafe_direction: DVec3,
    /// Frozen jink offset, meaningful only in `Evade`.
    pub evade_offset: DVec3,
}

impl Behavior {
    pub fn pursue(timer: u32) -> Self {
        Self {
            state: BehaviorState::Pursue,
            timer,
            strafe_direction: DVec3::ZERO,
            evade_offset: DVec3::ZERO,
        }
    }
}

/// A laser bolt. Player and enemy bolts share this shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Owner,
    /// Unit direction, fixed at creation.
    pub direction: DVec3,
    /// Ticks remaining.
    pub lifetime: u32,
}

/// One particle of an effect, relative to the effect origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub offset: DVec3,
    pub velocity: DVec3,
}

/// Companion light of an effect, fading on its own wall-clock timer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointLight {
    pub intensity: f64,
    /// Intensity removed per fade step.
    pub fade_step: f64,
    pub fade_interval_ms: f64,
    /// Session time of the next fade step.
    pub next_fade_ms: f64,
}

/// A spawn-and-forget particle burst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub particles: Vec<Particle>,
    pub age: u32,
    pub lifetime: u32,
    /// Opacity ramps from 1 to 0 across the final `fade_ticks` of lifetime.
    pub fade_ticks: u32,
    pub light: PointLight,
}

/// Presentation visual bound to an entity. Attached by the presentation sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual(pub VisualHandle);
