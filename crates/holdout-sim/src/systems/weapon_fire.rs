//! Weapon system: fire animation, trigger handling, fire effects, and
//! weapon switching.

use glam::{Quat, Vec3};
use tracing::debug;

use holdout_core::constants::*;
use holdout_core::enums::{FireEffect, WeaponKind};
use holdout_core::types::lift;

use crate::combat::damage_enemy;
use crate::random::roll;
use crate::weapons::WeaponDef;
use crate::world::GameWorld;
use crate::world_setup::spawn_projectile;

/// Step weapon animations, then fire the selected weapon if the trigger is held.
pub fn run(world: &mut GameWorld, fire: bool, dt: f32) {
    world.arsenal.animate(dt);

    if !fire {
        return;
    }
    let Some(def) = world.arsenal.try_fire(world.player.weapon) else {
        return;
    };

    let pitch = roll(&mut world.rng, 90, 110) as f32 / 100.0;
    world.play(def.sound, pitch, 1.0);

    match def.fire {
        FireEffect::Hitscan => fire_hitscan(world, &def),
        FireEffect::Projectile => fire_projectile(world, &def),
        FireEffect::Scatter => fire_scatter(world, &def),
    }
}

/// One ray along the view. Every enemy it passes through takes full damage.
pub fn fire_hitscan(world: &mut GameWorld, def: &WeaponDef) {
    let origin = world.camera.position;
    let direction = world.camera.forward();
    let hits: Vec<usize> = world
        .enemies
        .iter()
        .filter(|(_, enemy)| {
            let center = lift(enemy.position, ENEMY_CENTER_HEIGHT);
            ray_sphere(origin, direction, center, HIT_RADIUS).is_some()
        })
        .map(|(slot, _)| slot)
        .collect();
    for slot in hits {
        damage_enemy(world, slot, def.damage);
    }
}

/// Launch one projectile from the eye along the view.
pub fn fire_projectile(world: &mut GameWorld, def: &WeaponDef) {
    let origin = world.camera.position;
    let velocity = world.camera.forward() * PROJECTILE_LAUNCH_SPEED;
    spawn_projectile(world, origin, velocity, def.damage);
}

/// A fan of rays. Each ray damages at most one enemy: the one nearest the
/// player among its precise hits, unless a wide-radius hit sits even closer.
pub fn fire_scatter(world: &mut GameWorld, def: &WeaponDef) {
    let origin = world.camera.position;
    let forward = world.camera.forward();
    let perpendicular = forward.any_orthonormal_vector();

    for ray in 0..SCATTER_RAY_COUNT {
        let direction = if ray == 0 {
            forward
        } else {
            let jitter = roll(&mut world.rng, 0, 100) as f32 / 100.0 * SCATTER_SPREAD;
            let angle = (roll(&mut world.rng, 0, 359) as f32).to_radians();
            let spread = (forward + perpendicular * jitter).normalize();
            Quat::from_axis_angle(forward, angle) * spread
        };

        if let Some(slot) = scatter_target(world, origin, direction) {
            damage_enemy(world, slot, def.damage);
        }
    }
}

fn scatter_target(world: &GameWorld, origin: Vec3, direction: Vec3) -> Option<usize> {
    let player = world.player.position;
    let mut candidate: Option<(usize, f32)> = None;

    for (slot, enemy) in world.enemies.iter() {
        let center = lift(enemy.position, ENEMY_CENTER_HEIGHT);
        if ray_sphere(origin, direction, center, HIT_RADIUS).is_none() {
            continue;
        }
        let distance = enemy.position.distance(player);
        if candidate.is_none_or(|(_, best)| distance < best) {
            candidate = Some((slot, distance));
        }
    }

    for (slot, enemy) in world.enemies.iter() {
        let center = lift(enemy.position, ENEMY_CENTER_HEIGHT);
        if ray_sphere(origin, direction, center, WIDE_HIT_RADIUS).is_none() {
            continue;
        }
        let distance = enemy.position.distance(player);
        if candidate.is_none_or(|(_, best)| distance < best) {
            candidate = Some((slot, distance));
        }
    }

    candidate.map(|(slot, _)| slot)
}

/// Distance along a unit ray to the first point inside a sphere, if the
/// sphere lies ahead of the origin. An origin inside the sphere hits at 0.
pub fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let radius_sq = radius * radius;
    if to_center.length_squared() < radius_sq {
        return Some(0.0);
    }
    let along = to_center.dot(direction);
    if along < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - along * along;
    if closest_sq > radius_sq {
        return None;
    }
    Some(along - (radius_sq - closest_sq).sqrt())
}

/// Switch weapons. Refused for locked weapons and while any weapon is
/// mid-animation.
pub fn select_weapon(world: &mut GameWorld, weapon: WeaponKind) -> bool {
    if world.arsenal.is_busy() || !world.arsenal.state(weapon).unlocked {
        debug!(?weapon, "weapon switch refused");
        return false;
    }
    if world.player.weapon != weapon {
        world.player.weapon = weapon;
        debug!(?weapon, "weapon selected");
    }
    true
}

/// Switch to the next unlocked weapon.
pub fn cycle_weapon(world: &mut GameWorld) -> bool {
    match world.arsenal.next_unlocked(world.player.weapon) {
        Some(next) => select_weapon(world, next),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use holdout_core::enums::{EnemyKind, Sound};

    use super::*;
    use crate::config::SimConfig;
    use crate::world_setup::spawn_enemy;

    fn world() -> GameWorld {
        let mut w = GameWorld::new(&SimConfig::default());
        w.camera.position = lift(Vec2::ZERO, PLAYER_EYE_HEIGHT);
        w
    }

    fn health(w: &GameWorld, slot: usize) -> Option<i32> {
        w.enemies.get(slot).map(|e| e.health)
    }

    #[test]
    fn ray_sphere_cases() {
        let o = Vec3::ZERO;
        let z = Vec3::Z;
        assert_eq!(ray_sphere(o, z, Vec3::new(0.0, 0.0, 5.0), 1.0), Some(4.0));
        assert_eq!(ray_sphere(o, z, Vec3::new(0.0, 0.0, -5.0), 1.0), None);
        assert_eq!(ray_sphere(o, z, Vec3::new(2.0, 0.0, 5.0), 1.0), None);
        assert_eq!(ray_sphere(o, z, Vec3::new(0.5, 0.0, 0.0), 1.0), Some(0.0));
    }

    #[test]
    fn hitscan_hits_every_enemy_on_the_line() {
        let mut w = world();
        let near = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 5.0)).unwrap();
        let far = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 12.0)).unwrap();
        let aside = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(6.0, 5.0)).unwrap();
        let behind = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, -5.0)).unwrap();

        run(&mut w, true, 0.016);

        assert_eq!(health(&w, near), Some(7));
        assert_eq!(health(&w, far), Some(7));
        assert_eq!(health(&w, aside), Some(8));
        assert_eq!(health(&w, behind), Some(8));
        assert_eq!(w.audio_events[0].sound(), Sound::PistolShot);
    }

    #[test]
    fn held_trigger_is_rate_limited() {
        let mut w = world();
        run(&mut w, true, 0.016);
        run(&mut w, true, 0.016);
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).ammo, 19);
    }

    #[test]
    fn dry_weapon_does_nothing() {
        let mut w = world();
        w.arsenal.state_mut(WeaponKind::Pistol).ammo = 1;
        let slot = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 5.0)).unwrap();

        run(&mut w, true, 0.016);
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).ammo, 0);
        assert_eq!(health(&w, slot), Some(7));

        for _ in 0..60 {
            run(&mut w, false, 0.05);
        }
        w.audio_events.clear();
        run(&mut w, true, 0.016);

        assert_eq!(health(&w, slot), Some(7));
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).current_frame, 0);
        assert!(w.audio_events.is_empty());
    }

    #[test]
    fn launcher_spawns_projectile_from_eye() {
        let mut w = world();
        w.arsenal.state_mut(WeaponKind::Launcher).unlocked = true;
        w.arsenal.state_mut(WeaponKind::Launcher).ammo = 2;
        assert!(select_weapon(&mut w, WeaponKind::Launcher));

        run(&mut w, true, 0.016);

        let (_, projectile) = w.projectiles.iter().next().unwrap();
        assert_eq!(projectile.position, w.camera.position);
        assert!((projectile.velocity.length() - PROJECTILE_LAUNCH_SPEED).abs() < 1e-3);
    }

    #[test]
    fn scatter_prefers_enemy_nearest_player() {
        let mut w = world();
        w.arsenal.state_mut(WeaponKind::Shotgun).unlocked = true;
        w.arsenal.state_mut(WeaponKind::Shotgun).ammo = 1;
        w.player.weapon = WeaponKind::Shotgun;
        let near = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 20.0)).unwrap();
        let far = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 40.0)).unwrap();

        run(&mut w, true, 0.016);

        // The near enemy screens the far one from every ray
        assert!(health(&w, near).unwrap() < 8);
        assert_eq!(health(&w, far), Some(8));
    }

    #[test]
    fn scatter_wide_hit_closer_to_player_wins() {
        let mut w = world();
        let def = crate::weapons::definition(WeaponKind::Shotgun);
        // Only grazed by the wide radius, but closer to the player
        let grazed = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.9, 5.0)).unwrap();
        spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 10.0)).unwrap();

        let target = scatter_target(&w, w.camera.position, Vec3::Z);
        assert_eq!(target, Some(grazed));

        // The unperturbed first ray always lands on the grazed enemy
        fire_scatter(&mut w, &def);
        assert!(health(&w, grazed).unwrap() < 8);
    }

    #[test]
    fn switching_is_refused_mid_animation_or_when_locked() {
        let mut w = world();
        w.arsenal.state_mut(WeaponKind::Shotgun).unlocked = true;

        assert!(!select_weapon(&mut w, WeaponKind::Launcher));
        run(&mut w, true, 0.016);
        assert!(!select_weapon(&mut w, WeaponKind::Shotgun));
        assert_eq!(w.player.weapon, WeaponKind::Pistol);

        for _ in 0..20 {
            run(&mut w, false, 0.1);
        }
        assert!(cycle_weapon(&mut w));
        assert_eq!(w.player.weapon, WeaponKind::Shotgun);
    }
}
