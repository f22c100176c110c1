//! Events emitted by the simulation for audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::Sound;

/// Audio requests for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Non-positional effect.
    Play { sound: Sound, pitch: f32, volume: f32 },
    /// Positional effect; the audio layer attenuates by distance from the listener.
    PlayAt { sound: Sound, position: Vec3 },
}

impl AudioEvent {
    /// The effect being requested.
    pub fn sound(&self) -> Sound {
        match self {
            AudioEvent::Play { sound, .. } | AudioEvent::PlayAt { sound, .. } => *sound,
        }
    }
}
