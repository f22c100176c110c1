//! Entity components stored in the simulation pools.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Liveness is the pool slot
//! itself: an occupied slot is a live entity.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A hostile walker on the ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Signed; may go negative for the instant between a hit and death handling.
    pub health: i32,
    pub state: EnemyState,
    pub position: Vec2,
    /// Unit (or zero) heading; scaled by `speed` during integration.
    pub velocity: Vec2,
    pub speed: f32,
    pub attack_range: f32,
    pub detect_range: f32,
    /// Counts down toward -1; reaching -1 ends an animation cycle.
    pub anim_frame: i32,
    /// Frames in one animation cycle.
    pub anim_frames: i32,
    pub anim_timer: f32,
    /// Seconds per animation frame.
    pub frame_time: f32,
    /// Vertical sprite sheet offset; shifted by one row while attacking.
    pub sprite_row: i32,
    pub attack: AttackEffect,
    pub death: DeathEffect,
}

/// An explosive launcher round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// `y` is height above the ground.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Scalar applied to velocity during integration.
    pub speed: f32,
    pub damage: i32,
}

/// Owned payload of a world item, applied once on pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pickup {
    /// Adds ammo to a weapon, up to its cap.
    Ammo { weapon: WeaponKind, amount: i32 },
    /// Unlocks a weapon and loads a single round.
    UnlockWeapon { weapon: WeaponKind },
    /// Raises a weapon's ammo cap.
    AmmoBag { weapon: WeaponKind, extra: i32 },
    /// Restores player health, up to the health cap.
    Heal { amount: i32 },
    /// Raises the player's health cap.
    HealthBoost { amount: i32 },
}

/// A collectible lying in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub position: Vec3,
    pub pickup: Pickup,
}

/// Static scenery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Vec3,
}

/// The single player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Residual velocity from shoves; movement input is applied separately.
    pub velocity: Vec2,
    pub health: i32,
    pub health_cap: i32,
    pub weapon: WeaponKind,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            health: crate::constants::PLAYER_START_HEALTH,
            health_cap: crate::constants::PLAYER_START_HEALTH_CAP,
            weapon: WeaponKind::Pistol,
        }
    }
}

/// Mutable runtime state of one weapon type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponState {
    pub unlocked: bool,
    pub ammo: i32,
    pub ammo_cap: i32,
    /// Non-zero while the fire animation plays; counts down to 0.
    pub current_frame: i32,
    /// Accumulated seconds toward the next animation step.
    pub timer_secs: f32,
}
