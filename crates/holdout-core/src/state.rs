//! Frame snapshot: the complete visible state handed to renderers each frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::Pickup;
use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Camera, SimTime};

/// Complete game state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub camera: Camera,
    pub player: PlayerView,
    pub weapons: Vec<WeaponView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub items: Vec<ItemView>,
    pub props: Vec<PropView>,
    pub wave: WaveView,
    pub audio_events: Vec<AudioEvent>,
}

/// Player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub health: i32,
    pub health_cap: i32,
    pub weapon: WeaponKind,
}

/// One weapon slot for the HUD and the view-model animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub weapon: WeaponKind,
    pub unlocked: bool,
    pub ammo: i32,
    pub ammo_cap: i32,
    /// Current fire-animation frame (0 = idle).
    pub frame: i32,
    pub selected: bool,
}

/// A live enemy billboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Pool slot; stable for the enemy's lifetime.
    pub slot: usize,
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub position: Vec2,
    pub health: i32,
    /// Sprite sheet column (clamped to 0 while the counter sits at -1).
    pub frame: i32,
    pub sprite_row: i32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: usize,
    pub position: Vec3,
}

/// An item waiting to be collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub slot: usize,
    pub position: Vec3,
    pub pickup: Pickup,
}

/// A prop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropView {
    pub kind: PropKind,
    pub position: Vec3,
}

/// Wave progress and score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave: u32,
    pub max_enemies: u32,
    pub enemies_left: u32,
    pub score: u32,
}
