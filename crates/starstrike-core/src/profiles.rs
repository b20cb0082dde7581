//! Effect-specific explosion profiles.
//!
//! Consolidates per-kind particle and light parameters for the effects system.

use crate::enums::EffectKind;

/// Particle burst and light parameters for one effect kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionProfile {
    pub particle_count: usize,
    /// Particles start uniformly inside a sphere of this radius.
    pub radius: f64,
    /// Outward particle speed range (units per tick).
    pub speed_min: f64,
    pub speed_max: f64,
    pub lifetime_ticks: u32,
    /// Opacity fades over this many final ticks of lifetime.
    pub fade_ticks: u32,
    pub light_intensity: f64,
    pub light_fade_step: f64,
    pub light_fade_interval_ms: f64,
}

/// Get the explosion profile for an effect kind.
pub fn explosion_profile(kind: EffectKind) -> ExplosionProfile {
    match kind {
        EffectKind::StructureExplosion => ExplosionProfile {
            particle_count: 500,
            radius: 30.0,
            speed_min: 0.05,
            speed_max: 0.2,
            lifetime_ticks: 300,
            fade_ticks: 200,
            light_intensity: 10.0,
            light_fade_step: 0.05,
            light_fade_interval_ms: 100.0,
        },
        EffectKind::SecondaryExplosion => ExplosionProfile {
            particle_count: 250,
            radius: 21.0,
            speed_min: 0.1,
            speed_max: 0.3,
            lifetime_ticks: 200,
            fade_ticks: 100,
            light_intensity: 5.0,
            light_fade_step: 0.1,
            light_fade_interval_ms: 50.0,
        },
        EffectKind::EnemyExplosion => ExplosionProfile {
            particle_count: 50,
            radius: 0.5,
            speed_min: 0.02,
            speed_max: 0.06,
            lifetime_ticks: 60,
            fade_ticks: 30,
            light_intensity: 2.0,
            light_fade_step: 0.2,
            light_fade_interval_ms: 50.0,
        },
        // Light only: full intensity for 100 ms, then gone.
        EffectKind::HitFlash => ExplosionProfile {
            particle_count: 0,
            radius: 0.0,
            speed_min: 0.0,
            speed_max: 0.0,
            lifetime_ticks: 0,
            fade_ticks: 0,
            light_intensity: 2.0,
            light_fade_step: 2.0,
            light_fade_interval_ms: 100.0,
        },
    }
}
