//! Snapshot system: reads the world and builds a complete `FrameSnapshot`.
//!
//! Read-only: it never modifies the world.

use holdout_core::events::AudioEvent;
use holdout_core::state::*;

use crate::world::GameWorld;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(world: &GameWorld, audio_events: Vec<AudioEvent>) -> FrameSnapshot {
    FrameSnapshot {
        time: world.time,
        mode: world.mode,
        camera: world.camera,
        player: PlayerView {
            position: world.player.position,
            health: world.player.health,
            health_cap: world.player.health_cap,
            weapon: world.player.weapon,
        },
        weapons: build_weapons(world),
        enemies: build_enemies(world),
        projectiles: world
            .projectiles
            .iter()
            .map(|(slot, p)| ProjectileView {
                slot,
                position: p.position,
            })
            .collect(),
        items: world
            .items
            .iter()
            .map(|(slot, item)| ItemView {
                slot,
                position: item.position,
                pickup: item.pickup,
            })
            .collect(),
        props: world
            .props
            .iter()
            .map(|(_, prop)| PropView {
                kind: prop.kind,
                position: prop.position,
            })
            .collect(),
        wave: WaveView {
            wave: world.wave.wave,
            max_enemies: world.wave.max_enemies,
            enemies_left: world.wave.live_enemies,
            score: world.wave.score,
        },
        audio_events,
    }
}

fn build_weapons(world: &GameWorld) -> Vec<WeaponView> {
    world
        .arsenal
        .iter()
        .map(|(weapon, state)| WeaponView {
            weapon,
            unlocked: state.unlocked,
            ammo: state.ammo,
            ammo_cap: state.ammo_cap,
            frame: state.current_frame,
            selected: weapon == world.player.weapon,
        })
        .collect()
}

fn build_enemies(world: &GameWorld) -> Vec<EnemyView> {
    world
        .enemies
        .iter()
        .map(|(slot, enemy)| EnemyView {
            slot,
            kind: enemy.kind,
            state: enemy.state,
            position: enemy.position,
            health: enemy.health,
            frame: enemy.anim_frame.max(0),
            sprite_row: enemy.sprite_row,
        })
        .collect()
}
