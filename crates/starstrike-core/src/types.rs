//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// World-space placement of an entity. Local +Z is "forward".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

impl Transform {
    /// Identity orientation at the given position.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            orientation: DQuat::IDENTITY,
        }
    }

    /// Place at `position`, rotated so local +Z points along `direction`.
    /// A zero-length direction leaves the orientation at identity.
    pub fn looking_along(position: DVec3, direction: DVec3) -> Self {
        Self {
            position,
            orientation: look_rotation(direction),
        }
    }

    /// Unit forward vector (local +Z in world space).
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    /// Distance to a world-space point.
    pub fn distance_to(&self, point: DVec3) -> f64 {
        self.position.distance(point)
    }

    /// Unit direction towards a world-space point, or zero when coincident.
    pub fn direction_to(&self, point: DVec3) -> DVec3 {
        (point - self.position).normalize_or_zero()
    }
}

/// Rotation taking local +Z onto `direction`.
pub fn look_rotation(direction: DVec3) -> DQuat {
    match direction.try_normalize() {
        Some(dir) => DQuat::from_rotation_arc(DVec3::Z, dir),
        None => DQuat::IDENTITY,
    }
}

/// Simulation time tracking.
///
/// `tick` counts presentation frames. `now_ms` is the session wall clock,
/// accumulated from the host's per-frame delta; it drives spawn timers,
/// fire intervals and delayed presentation effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    pub tick: u64,
    pub now_ms: f64,
}

impl SimTime {
    /// Advance by one frame of `dt_ms` milliseconds. Negative or NaN deltas
    /// count as zero.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        if dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
    }
}

/// Opaque handle to a visual owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);
