//! Projectile ballistics and detonation.
//!
//! Each projectile is checked once per frame, at its current position, for
//! ground contact and enemy proximity. There is no swept test, so a fast
//! projectile can pass through a target between two checks.

use glam::Vec3;
use tracing::trace;

use holdout_core::constants::*;
use holdout_core::enums::Sound;
use holdout_core::types::{ground, lift};

use crate::combat::damage_enemies_radius;
use crate::world::GameWorld;

/// Advance or detonate every projectile in flight.
pub fn run(world: &mut GameWorld, dt: f32) {
    for slot in 0..world.projectiles.capacity() {
        let Some(projectile) = world.projectiles.get(slot).copied() else {
            continue;
        };

        if projectile.position.y <= 0.0 || near_enemy(world, projectile.position) {
            world.projectiles.release(slot);
            explode(world, projectile.position, projectile.damage);
            continue;
        }

        if let Some(projectile) = world.projectiles.get_mut(slot) {
            projectile.position += projectile.velocity * dt * projectile.speed;
            projectile.velocity.y -= PROJECTILE_DROP * dt;
        }
    }
}

fn near_enemy(world: &GameWorld, position: Vec3) -> bool {
    world.enemies.iter().any(|(_, enemy)| {
        lift(enemy.position, ENEMY_CENTER_HEIGHT).distance(position) < PROJECTILE_FUSE_RADIUS
    })
}

/// Splash damage around a detonation point.
pub fn explode(world: &mut GameWorld, position: Vec3, damage: i32) {
    world.play_at(Sound::Explosion, position);
    trace!(?position, damage, "projectile exploded");
    damage_enemies_radius(world, ground(position), SPLASH_RADIUS, damage);
}
