//! Simulation constants.
//!
//! Motion constants are per tick (one tick per presentation frame); times
//! suffixed `_MS` are measured on the session wall clock. Balance parameters
//! that designers tune live in [`crate::config::Tuning`] instead.

use glam::DVec3;

use crate::components::Hardpoints;

/// Nominal host frame rate (Hz) used by the fixed-rate game loop.
pub const TICK_RATE: u32 = 60;

/// Nominal milliseconds per frame at `TICK_RATE`.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Player ship ---

pub const PLAYER_MAX_INTEGRITY: u32 = 100;

/// Speed at session start.
pub const PLAYER_INITIAL_SPEED: f64 = 0.01;

pub const PLAYER_MAX_SPEED: f64 = 0.025;

/// Speed gained per tick while SpeedUp is held.
pub const PLAYER_ACCELERATION: f64 = 0.0005;

/// Speed lost per tick while SpeedDown is held.
pub const PLAYER_DECELERATION: f64 = 0.0003;

/// Yaw rate added per tick while a yaw action is held (radians).
pub const PLAYER_TURN_SPEED: f64 = 0.005;

/// Pitch rate added per tick while a pitch action is held (radians).
pub const PLAYER_PITCH_SPEED: f64 = 0.005;

/// Per-tick decay of the rotation-rate accumulator.
pub const ROTATION_DAMPING: f64 = 0.9;

/// Per-tick decay of the velocity accumulator.
pub const VELOCITY_DAMPING: f64 = 0.95;

/// Player collision sphere radius.
pub const PLAYER_HIT_RADIUS: f64 = 0.5;

/// Integrity lost per enemy laser hit.
pub const PLAYER_HIT_DAMAGE: u32 = 1;

/// Maximum S-foil opening angle (radians).
pub const WING_ANGLE_MAX: f64 = 0.3;

/// S-foil angle gained per unit of speed.
pub const WING_ANGLE_PER_SPEED: f64 = 10.0;

/// Wingtip laser mounts in ship-local space.
pub const WINGTIP_HARDPOINTS: Hardpoints = Hardpoints {
    upper_left: DVec3::new(-0.3, 0.1, 0.3),
    upper_right: DVec3::new(0.3, 0.1, 0.3),
    lower_left: DVec3::new(-0.3, -0.1, 0.3),
    lower_right: DVec3::new(0.3, -0.1, 0.3),
};

// --- Lasers ---

/// Distance a laser travels per tick.
pub const LASER_SPEED: f64 = 1.0;

/// Ticks a laser survives (LASER_SPEED * LASER_LIFETIME = full range).
pub const LASER_LIFETIME: u32 = 200;

/// Ticks between player trigger pulls.
pub const LASER_COOLDOWN: u32 = 20;

// --- Target structure ---

pub const TARGET_POSITION: DVec3 = DVec3::new(0.0, 0.0, 800.0);

pub const TARGET_MAX_INTEGRITY: u32 = 100;

/// Collision sphere radius of the structure.
pub const TARGET_RADIUS: f64 = 20.0;

/// Integrity lost per player laser hit.
pub const TARGET_HIT_DAMAGE: u32 = 10;

/// Self-rotation about +Y per tick (radians).
pub const TARGET_ROTATION_RATE: f64 = 0.0005;

// --- Enemy fighters ---

/// Enemy collision sphere radius.
pub const ENEMY_HIT_RADIUS: f64 = 1.0;

/// Range of the initial behavior timer for ambient spawns (ticks).
pub const ENEMY_INITIAL_TIMER: (u32, u32) = (0, 100);

/// Pursue timer after any return to pursuit (ticks).
pub const PURSUE_TIMER: (u32, u32) = (60, 120);

/// Strafe run duration (ticks).
pub const STRAFE_TIMER: (u32, u32) = (40, 80);

/// Evasive maneuver duration (ticks).
pub const EVADE_TIMER: (u32, u32) = (20, 40);

/// Forced-pursuit timer given to encounter waves (ticks).
pub const ENCOUNTER_PURSUE_TIMER: (u32, u32) = (100, 150);

/// Per-axis jitter added to the strafe heading (x and y, ± half of this).
pub const STRAFE_JITTER: f64 = 0.5;

/// Pursuers beyond this distance fly straight at the player.
pub const PURSUE_ORBIT_RADIUS: f64 = 20.0;

/// Orbiting pursuers push out beyond this distance, pull in inside it.
pub const PURSUE_HOLD_RADIUS: f64 = 25.0;

/// Orbit blend: tangential and radial weights.
pub const PURSUE_TANGENT_WEIGHT: f64 = 0.6;
pub const PURSUE_RADIAL_WEIGHT: f64 = 0.4;

/// Evade blend: player-tracking and frozen-offset weights.
pub const EVADE_TRACK_WEIGHT: f64 = 0.3;
pub const EVADE_OFFSET_WEIGHT: f64 = 0.7;

/// Facing blend: movement and player-tracking weights.
pub const LOOK_MOVE_WEIGHT: f64 = 0.7;
pub const LOOK_TRACK_WEIGHT: f64 = 0.3;

// --- Spawning ---

/// Ambient spawn annulus around the target structure.
pub const AMBIENT_SPAWN_RADIUS: (f64, f64) = (30.0, 50.0);

/// Ambient spawn height jitter (± this).
pub const AMBIENT_SPAWN_HEIGHT_JITTER: f64 = 10.0;

/// Encounter wave size: `min(BASE + index, MAX)`.
pub const ENCOUNTER_BASE_COUNT: usize = 2;
pub const ENCOUNTER_MAX_COUNT: usize = 4;

/// Encounter waves spawn ahead of the player at this distance.
pub const ENCOUNTER_SPAWN_DISTANCE: f64 = 60.0;

/// Lateral scatter of encounter spawns (± this on each axis).
pub const ENCOUNTER_SPAWN_SCATTER: f64 = 15.0;

// --- Progression ---

/// Delay between the structure's destruction and the victory overlay.
pub const VICTORY_REVEAL_DELAY_MS: f64 = 5000.0;

/// Delays of the two secondary structure explosions.
pub const SECONDARY_EXPLOSION_DELAYS_MS: [f64; 2] = [1000.0, 2500.0];

/// Particle-count divisors and size factors of the secondary explosions.
pub const SECONDARY_EXPLOSION_DIVISORS: [usize; 2] = [2, 3];
pub const SECONDARY_EXPLOSION_SCALES: [f64; 2] = [0.7, 0.5];
