//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::SoundCue;

/// Audio events for the presentation sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    Play { cue: SoundCue },
    Stop { cue: SoundCue },
}

impl AudioEvent {
    pub fn play(cue: SoundCue) -> Self {
        AudioEvent::Play { cue }
    }

    pub fn stop(cue: SoundCue) -> Self {
        AudioEvent::Stop { cue }
    }
}
