//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-game. The scene is rendered idle; nothing is simulated.
    #[default]
    Start,
    /// Full simulation active.
    Play,
    /// Player integrity exhausted.
    GameOver,
    /// Target structure destroyed.
    Victory,
}

impl GamePhase {
    /// Terminal display phases: simulation suspended, effects continue.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// Enemy fighter behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Close on the player, orbiting once within range.
    #[default]
    Pursue,
    /// Fly a frozen heading past the player.
    Strafe,
    /// Jink along a frozen random offset with some player tracking.
    Evade,
}

/// Which side fired a projectile. Decides what it can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Something a projectile can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Structure,
    Enemies,
    Player,
}

impl Owner {
    /// Collision targets tested for this owner's projectiles, in order.
    pub fn hit_targets(self) -> &'static [HitTarget] {
        match self {
            Owner::Player => &[HitTarget::Structure, HitTarget::Enemies],
            Owner::Enemy => &[HitTarget::Player],
        }
    }
}

/// Kind of visual the presentation layer is asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    PlayerShip,
    TargetStructure,
    EnemyFighter,
    PlayerLaser,
    EnemyLaser,
    Effect(EffectKind),
}

impl VisualKind {
    pub fn laser(owner: Owner) -> Self {
        match owner {
            Owner::Player => VisualKind::PlayerLaser,
            Owner::Enemy => VisualKind::EnemyLaser,
        }
    }
}

/// Visual effect flavours. Each has an explosion profile in `profiles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    StructureExplosion,
    SecondaryExplosion,
    EnemyExplosion,
    HitFlash,
}

/// Named sound cues the presentation layer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Looping engine hum while a session is in play.
    EngineLoop,
    PlayerLaser,
    EnemyLaser,
    StructureHit,
    PlayerHit,
    EnemyExplosion,
    StructureExplosion,
    /// An approach encounter wave arrived.
    EncounterAlarm,
    Victory,
    GameOver,
}

/// HUD readouts pushed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudField {
    /// Current speed as a percentage of max speed.
    SpeedPercent,
    /// Player distance to the target structure.
    TargetDistance,
    PlayerIntegrityPercent,
    TargetIntegrityPercent,
    EnemyCount,
    /// S-foil opening angle in radians.
    WingAngle,
}

/// Full-screen overlays (start screen, end-of-game restart affordances).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    StartScreen,
    None,
    GameOver,
    Victory,
}
