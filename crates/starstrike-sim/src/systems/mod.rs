//! Systems that operate on the simulation each tick.
//!
//! Systems are free functions over the world and the engine-owned
//! singletons. They do not own state.

pub mod effects;
pub mod enemy_ai;
pub mod player_flight;
pub mod presentation_sync;
pub mod projectiles;
pub mod snapshot;
pub mod spawn_director;
pub mod structure;
