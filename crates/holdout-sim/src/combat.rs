//! Combat resolution: damage to enemies and the player, kills, and
//! enemy attack effects.

use glam::Vec2;
use tracing::{info, trace};

use holdout_core::components::Item;
use holdout_core::constants::{ENEMY_CENTER_HEIGHT, SCORE_PER_KILL};
use holdout_core::enums::{AttackEffect, DeathEffect, GameMode, Sound};
use holdout_core::types::lift;

use crate::pickups::random_loot;
use crate::random::roll_percent;
use crate::world::{GameWorld, HitMemo};
use crate::world_setup::spawn_item;

/// Damage one enemy. Dead slots are ignored.
///
/// The hit sound is skipped when this slot was also the last one damaged at
/// the exact same timestamp. The memo is shared by every enemy, so hitting
/// A, B, then A again in one frame plays all three.
pub fn damage_enemy(world: &mut GameWorld, slot: usize, amount: i32) {
    let now = world.time.elapsed_secs;
    let Some(enemy) = world.enemies.get_mut(slot) else {
        return;
    };
    enemy.health -= amount;
    let health = enemy.health;
    let position = lift(enemy.position, ENEMY_CENTER_HEIGHT);

    let memo = HitMemo { slot, time: now };
    if world.hit_memo != Some(memo) {
        world.play_at(Sound::EnemyHit, position);
    }
    world.hit_memo = Some(memo);

    if health < 1 {
        kill_enemy(world, slot);
    }
}

/// Remove a dead enemy, score it, and run its death effect once.
fn kill_enemy(world: &mut GameWorld, slot: usize) {
    let Some(enemy) = world.enemies.release(slot) else {
        return;
    };
    world.wave.score += SCORE_PER_KILL;
    world.wave.live_enemies = world.wave.live_enemies.saturating_sub(1);
    world.play_at(Sound::EnemyDeath, lift(enemy.position, ENEMY_CENTER_HEIGHT));
    trace!(slot, kind = ?enemy.kind, "enemy killed");

    match enemy.death {
        DeathEffect::Nothing => {}
        DeathEffect::DropLoot { chance_percent } => {
            if roll_percent(&mut world.rng, chance_percent) {
                let pickup = random_loot(&mut world.rng);
                spawn_item(
                    world,
                    Item {
                        position: lift(enemy.position, 0.0),
                        pickup,
                    },
                );
            }
        }
    }
}

/// Damage every living enemy strictly within `radius` of `center` on the
/// ground plane.
pub fn damage_enemies_radius(world: &mut GameWorld, center: Vec2, radius: f32, amount: i32) {
    let targets: Vec<usize> = world
        .enemies
        .iter()
        .filter(|(_, enemy)| enemy.position.distance(center) < radius)
        .map(|(slot, _)| slot)
        .collect();
    for slot in targets {
        damage_enemy(world, slot, amount);
    }
}

/// Damage the player. Health below zero ends the session.
pub fn damage_player(world: &mut GameWorld, amount: i32) {
    world.player.health -= amount;
    world.play(Sound::PlayerHurt, 1.0, 1.0);
    if world.player.health < 0 && world.mode == GameMode::Playing {
        world.mode = GameMode::GameOver;
        world.play(Sound::GameOver, 1.0, 1.0);
        info!(
            wave = world.wave.wave,
            score = world.wave.score,
            "player died, game over"
        );
    }
}

/// Run the attack effect of the enemy in `slot` against the player.
pub fn enemy_attack(world: &mut GameWorld, slot: usize) {
    let Some(enemy) = world.enemies.get(slot) else {
        return;
    };
    let attack = enemy.attack;
    let origin = enemy.position;
    world.play_at(Sound::EnemyAttack, lift(origin, ENEMY_CENTER_HEIGHT));

    match attack {
        AttackEffect::Strike { damage } => damage_player(world, damage),
        AttackEffect::Maul { damage, shove } => {
            damage_player(world, damage);
            let away = (world.player.position - origin).normalize_or_zero();
            world.player.velocity += away * shove;
        }
    }
}

#[cfg(test)]
mod tests {
    use holdout_core::enums::EnemyKind;

    use super::*;
    use crate::config::SimConfig;
    use crate::world_setup::spawn_enemy;

    fn world() -> GameWorld {
        GameWorld::new(&SimConfig::default())
    }

    fn count(world: &GameWorld, sound: Sound) -> usize {
        world
            .audio_events
            .iter()
            .filter(|e| e.sound() == sound)
            .count()
    }

    #[test]
    fn damage_to_dead_slot_is_ignored() {
        let mut w = world();
        damage_enemy(&mut w, 3, 10);
        assert!(w.audio_events.is_empty());
        assert_eq!(w.wave.score, 0);
    }

    #[test]
    fn kill_scores_once() {
        let mut w = world();
        w.wave.live_enemies = 1;
        let slot = spawn_enemy(&mut w, EnemyKind::Grunt, Vec2::new(3.0, 3.0)).unwrap();
        damage_enemy(&mut w, slot, 100);
        damage_enemy(&mut w, slot, 100);
        assert!(!w.enemies.is_active(slot));
        assert_eq!(w.wave.score, SCORE_PER_KILL);
        assert_eq!(w.wave.live_enemies, 0);
        assert_eq!(count(&w, Sound::EnemyDeath), 1);
    }

    #[test]
    fn hit_memo_is_system_wide() {
        let mut w = world();
        let a = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(5.0, 0.0)).unwrap();
        let b = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(-5.0, 0.0)).unwrap();

        // Same slot twice at one timestamp: one sound
        damage_enemy(&mut w, a, 1);
        damage_enemy(&mut w, a, 1);
        assert_eq!(count(&w, Sound::EnemyHit), 1);

        // A, B, A: the memo only remembers the last slot
        damage_enemy(&mut w, b, 1);
        damage_enemy(&mut w, a, 1);
        assert_eq!(count(&w, Sound::EnemyHit), 3);

        // Later timestamp plays again
        w.time.advance(0.016);
        damage_enemy(&mut w, a, 1);
        assert_eq!(count(&w, Sound::EnemyHit), 4);
    }

    #[test]
    fn radius_is_strict() {
        let mut w = world();
        let inside = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(2.9, 0.0)).unwrap();
        let edge = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(0.0, 3.0)).unwrap();
        let outside = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(-4.0, 0.0)).unwrap();
        let full = w.enemies.get(inside).unwrap().health;

        damage_enemies_radius(&mut w, Vec2::ZERO, 3.0, 1);

        assert_eq!(w.enemies.get(inside).unwrap().health, full - 1);
        assert_eq!(w.enemies.get(edge).unwrap().health, full);
        assert_eq!(w.enemies.get(outside).unwrap().health, full);
    }

    #[test]
    fn player_death_is_below_zero() {
        let mut w = world();
        w.player.health = 1;
        damage_player(&mut w, 1);
        assert_eq!(w.player.health, 0);
        assert_eq!(w.mode, GameMode::Playing);
        damage_player(&mut w, 1);
        assert_eq!(w.mode, GameMode::GameOver);
        assert_eq!(count(&w, Sound::GameOver), 1);
    }

    #[test]
    fn maul_shoves_player_away() {
        let mut w = world();
        w.player.position = Vec2::new(0.0, 0.0);
        let slot = spawn_enemy(&mut w, EnemyKind::Brute, Vec2::new(-1.0, 0.0)).unwrap();
        let before = w.player.health;
        enemy_attack(&mut w, slot);
        assert!(w.player.health < before);
        assert!(w.player.velocity.x > 0.0);
        assert_eq!(w.player.velocity.y, 0.0);
    }

    #[test]
    fn strike_does_not_shove() {
        let mut w = world();
        let slot = spawn_enemy(&mut w, EnemyKind::Grunt, Vec2::new(1.0, 0.0)).unwrap();
        enemy_attack(&mut w, slot);
        assert_eq!(w.player.health, 9);
        assert_eq!(w.player.velocity, Vec2::ZERO);
    }
}
