//! Core types and definitions for the STARSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants and tuning.
//! It has no dependency on any runtime, renderer or audio backend.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod profiles;
pub mod state;
pub mod types;

pub use glam::{DQuat, DVec3};

#[cfg(test)]
mod tests;
