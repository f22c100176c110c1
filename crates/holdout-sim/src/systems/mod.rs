//! Systems that operate on the game world each frame.
//!
//! Systems are plain functions that take `&mut GameWorld` (or `&GameWorld`
//! for read-only). They do not own state; all state lives in the world.

pub mod enemy_ai;
pub mod items;
pub mod projectiles;
pub mod snapshot;
pub mod view;
pub mod wave_director;
pub mod weapon_fire;
