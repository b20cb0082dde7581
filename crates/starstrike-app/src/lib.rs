//! STARSTRIKE headless host.
//!
//! Runs the simulation on a fixed-rate loop thread, narrates the scene
//! through `log` and flies the ship with a scripted pilot.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod presentation;
pub mod state;

pub use starstrike_core as core;
