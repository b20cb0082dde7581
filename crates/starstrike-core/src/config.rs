//! Gameplay balance parameters.
//!
//! Everything here is a tuning knob rather than a rule of the game: enemy
//! aggression, spawn pacing and the approach-encounter schedule. Defaults
//! reproduce the reference balance. Hosts may load overrides from RON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Balance parameters consumed by the spawn director and fighter AI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Upper bound on live enemy fighters.
    pub enemy_cap: usize,
    /// Wall-clock interval between ambient spawns (ms).
    pub ambient_spawn_interval_ms: f64,
    /// Speed range of ambient spawns (units per tick).
    pub ambient_speed: (f64, f64),
    /// Player-to-target distances that trigger encounter waves, descending.
    pub encounter_distances: Vec<f64>,
    /// An encounter fires once the player is within this much of its distance.
    pub encounter_window: f64,
    /// Speed range of encounter spawns (units per tick).
    pub encounter_speed: (f64, f64),
    /// Pursuers closer than this may break off into strafe or evade.
    pub engage_range: f64,
    /// Probability that a break-off is a strafe run rather than an evade.
    pub strafe_chance: f64,
    /// Enemies only fire within this distance of the player.
    pub fire_range: f64,
    /// Per-enemy base fire interval range, rolled at spawn (ms).
    pub fire_interval_ms: (f64, f64),
    /// Fraction of the base interval that must elapse between shots.
    pub fire_interval_factor: f64,
    /// Chance per eligible tick that an evading enemy fires anyway.
    pub evade_fire_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_cap: 10,
            ambient_spawn_interval_ms: 5000.0,
            ambient_speed: (0.25, 0.4),
            encounter_distances: vec![700.0, 600.0, 500.0, 400.0, 300.0],
            encounter_window: 10.0,
            encounter_speed: (0.3, 0.45),
            engage_range: 25.0,
            strafe_chance: 0.3,
            fire_range: 60.0,
            fire_interval_ms: (1000.0, 1500.0),
            fire_interval_factor: 0.8,
            evade_fire_chance: 0.1,
        }
    }
}

impl Tuning {
    /// Parse RON text (missing fields take defaults) and validate it.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = ron::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_cap == 0 {
            return Err(out_of_range("enemy_cap", 0.0));
        }
        check_positive("ambient_spawn_interval_ms", self.ambient_spawn_interval_ms)?;
        check_span("ambient_speed", self.ambient_speed)?;
        check_span("encounter_speed", self.encounter_speed)?;
        check_span("fire_interval_ms", self.fire_interval_ms)?;
        check_probability("strafe_chance", self.strafe_chance)?;
        check_probability("evade_fire_chance", self.evade_fire_chance)?;
        check_positive("engage_range", self.engage_range)?;
        check_positive("fire_range", self.fire_range)?;
        check_non_negative("fire_interval_factor", self.fire_interval_factor)?;
        check_non_negative("encounter_window", self.encounter_window)?;
        for &distance in &self.encounter_distances {
            check_positive("encounter_distances", distance)?;
        }
        // Encounters are consumed head-first, so the list must shrink.
        for pair in self.encounter_distances.windows(2) {
            if pair[1] >= pair[0] {
                return Err(out_of_range("encounter_distances", pair[1]));
            }
        }
        Ok(())
    }
}

fn out_of_range(field: &'static str, value: f64) -> ConfigError {
    ConfigError::OutOfRange { field, value }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(out_of_range(field, value))
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(field, value))
    }
}

fn check_span(field: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    check_non_negative(field, min)?;
    if max < min || !max.is_finite() {
        return Err(out_of_range(field, max));
    }
    Ok(())
}
