//! Player input and commands fed to the simulation.
//!
//! `FrameInput` is sampled every frame; `PlayerCommand`s are discrete
//! actions queued for processing at the next frame boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Continuous input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Pointer movement since the previous frame (x = turn, y = look up/down).
    pub look_delta: Vec2,
    /// Movement axes: x = strafe right, y = forward. Each in -1..=1.
    pub movement: Vec2,
    /// Trigger held this frame.
    pub fire: bool,
}

/// All possible discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Switch to another weapon.
    SelectWeapon { weapon: WeaponKind },
    /// Cycle to the next unlocked weapon.
    NextWeapon,
    /// Tear down the session and start again at wave 1.
    Restart,
}
