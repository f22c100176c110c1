//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind parameters for spawning enemies and driving the FSM.

use holdout_core::enums::{AttackEffect, DeathEffect, EnemyKind};

/// Behavioral profile for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Starting health.
    pub health: i32,
    /// Ground speed (units/s).
    pub speed: f32,
    /// Distance at which the enemy notices the player.
    pub detect_range: f32,
    /// Distance at which the enemy starts attacking.
    pub attack_range: f32,
    /// Seconds per animation frame. Also paces attacks.
    pub frame_time: f32,
    /// Frames per animation cycle.
    pub anim_frames: i32,
    /// Base sprite sheet row.
    pub sprite_row: i32,
    pub attack: AttackEffect,
    pub death: DeathEffect,
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Grunt => EnemyProfile {
            health: 3,
            speed: 2.5,
            detect_range: 20.0,
            attack_range: 1.5,
            frame_time: 0.15,
            anim_frames: 4,
            sprite_row: 0,
            attack: AttackEffect::Strike { damage: 1 },
            death: DeathEffect::DropLoot { chance_percent: 25 },
        },
        EnemyKind::Runner => EnemyProfile {
            health: 2,
            speed: 5.0,
            detect_range: 26.0,
            attack_range: 1.2,
            frame_time: 0.1,
            anim_frames: 4,
            sprite_row: 2,
            attack: AttackEffect::Strike { damage: 1 },
            death: DeathEffect::DropLoot { chance_percent: 15 },
        },
        EnemyKind::Brute => EnemyProfile {
            health: 8,
            speed: 1.8,
            detect_range: 18.0,
            attack_range: 2.0,
            frame_time: 0.2,
            anim_frames: 6,
            sprite_row: 4,
            attack: AttackEffect::Maul {
                damage: 2,
                shove: 6.0,
            },
            death: DeathEffect::DropLoot { chance_percent: 50 },
        },
        EnemyKind::Stalker => EnemyProfile {
            health: 5,
            speed: 3.5,
            detect_range: 34.0,
            attack_range: 1.5,
            frame_time: 0.12,
            anim_frames: 5,
            sprite_row: 6,
            attack: AttackEffect::Strike { damage: 2 },
            death: DeathEffect::DropLoot { chance_percent: 35 },
        },
    }
}
