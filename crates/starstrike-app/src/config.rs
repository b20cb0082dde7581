//! Host configuration, read from the environment at startup.
//!
//! `STARSTRIKE_TUNING` names an optional RON file of balance overrides,
//! `STARSTRIKE_TIME_SCALE` speeds up or slows down loop pacing and
//! `STARSTRIKE_SEED` fixes the simulation seed. Anything missing or invalid
//! falls back to defaults with a warning.

use std::path::Path;

use anyhow::Context;

use starstrike_core::config::Tuning;
use starstrike_sim::SimConfig;

pub const TUNING_VAR: &str = "STARSTRIKE_TUNING";
pub const TIME_SCALE_VAR: &str = "STARSTRIKE_TIME_SCALE";
pub const SEED_VAR: &str = "STARSTRIKE_SEED";

/// Allowed pacing multipliers.
pub const TIME_SCALE_RANGE: (f64, f64) = (0.1, 16.0);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Loop pacing multiplier (1.0 = real time).
    pub time_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            time_scale: 1.0,
        }
    }
}

impl AppConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(TUNING_VAR) {
            match load_tuning(Path::new(&path)) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {path}");
                    config.sim.tuning = tuning;
                }
                Err(e) => log::warn!("Invalid tuning at {path:?}: {e:#}, using defaults"),
            }
        }

        if let Some(raw) = lookup(TIME_SCALE_VAR) {
            match parse_time_scale(&raw) {
                Some(scale) => config.time_scale = scale,
                None => log::warn!("Invalid {TIME_SCALE_VAR} {raw:?}, using 1.0"),
            }
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.sim.seed = seed,
                Err(e) => log::warn!("Invalid {SEED_VAR} {raw:?}: {e}, using {}", config.sim.seed),
            }
        }

        config
    }
}

/// Read and validate a RON tuning file.
pub fn load_tuning(path: &Path) -> anyhow::Result<Tuning> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let tuning = Tuning::from_ron_str(&text)?;
    Ok(tuning)
}

/// Parse a pacing multiplier, clamped to `TIME_SCALE_RANGE`.
pub fn parse_time_scale(raw: &str) -> Option<f64> {
    let scale: f64 = raw.trim().parse().ok()?;
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    Some(scale.clamp(TIME_SCALE_RANGE.0, TIME_SCALE_RANGE.1))
}
