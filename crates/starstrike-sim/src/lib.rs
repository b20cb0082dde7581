//! Simulation engine for STARSTRIKE.
//!
//! Owns the hecs entity registry, runs the per-frame systems in a fixed
//! order, drives the host's presentation adapter and produces
//! `GameStateSnapshot`s. Headless and deterministic for a given seed.

pub mod engine;
pub mod presentation;
pub mod progression;
pub mod registry;
pub mod schedule;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use presentation::{EffectFrame, NullPresentation, Presentation};
pub use starstrike_core as core;
