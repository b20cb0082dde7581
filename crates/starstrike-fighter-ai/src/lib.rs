//! Enemy fighter AI for STARSTRIKE.
//!
//! Implements the pursue / strafe / evade behavior state machine, the
//! per-state steering model, and the fire decision. Everything here is a
//! pure function over plain data plus an injected random source.

pub mod fsm;
pub mod gunnery;
pub mod steering;

pub use starstrike_core as core;

#[cfg(test)]
mod tests;
