//! Player input: discrete commands and the per-frame action set.
//!
//! Commands are queued and processed at the next tick boundary. The action
//! set is sampled once per frame and describes what is held right now.

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_MS;

/// Discrete session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin a session.
    StartGame,
    /// Begin a fresh session from the game-over or victory screen.
    RestartGame,
}

/// Logical flight actions held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub fire: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub speed_up: bool,
    pub speed_down: bool,
}

/// Everything the host hands the simulation for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub actions: ActionSet,
    /// Real time elapsed since the previous frame (ms).
    pub dt_ms: f64,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            actions: ActionSet::default(),
            dt_ms: FRAME_MS,
        }
    }
}

impl FrameInput {
    /// A nominal-length frame with the given actions held.
    pub fn with_actions(actions: ActionSet) -> Self {
        Self {
            actions,
            ..Default::default()
        }
    }
}
