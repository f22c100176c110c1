//! Enemy AI system: steps animation, integrates movement, then runs the
//! behavior FSM for every live enemy.
//!
//! Attacks requested by the FSM are collected and resolved after the pass
//! so the pool is not borrowed while the player takes damage.

use holdout_ai::fsm::{evaluate, EnemyContext};

use crate::combat::enemy_attack;
use crate::world::GameWorld;

/// Run one AI step for every live enemy.
pub fn run(world: &mut GameWorld, dt: f32) {
    let player = world.player.position;
    let bounds = world.bounds;
    let mut attacks: Vec<usize> = Vec::new();

    for (slot, enemy) in world.enemies.iter_mut() {
        enemy.anim_timer += dt;
        if enemy.anim_timer > enemy.frame_time {
            enemy.anim_timer = 0.0;
            enemy.anim_frame = (enemy.anim_frame - 1).max(-1);
        }

        enemy.position = bounds.clamp(enemy.position + enemy.velocity * enemy.speed * dt);

        let ctx = EnemyContext {
            state: enemy.state,
            anim_frame: enemy.anim_frame,
            anim_frames: enemy.anim_frames,
            velocity: enemy.velocity,
            to_player: player - enemy.position,
            detect_range: enemy.detect_range,
            attack_range: enemy.attack_range,
        };
        let update = evaluate(&ctx, &mut world.rng);

        enemy.state = update.state;
        enemy.velocity = update.velocity;
        enemy.anim_frame = update.anim_frame;
        enemy.sprite_row += update.sprite_row_shift;
        if update.attack {
            attacks.push(slot);
        }
    }

    for slot in attacks {
        enemy_attack(world, slot);
    }
}
