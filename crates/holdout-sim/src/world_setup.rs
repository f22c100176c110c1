//! Spawn factories and session setup/teardown.
//!
//! Every spawn goes through a fixed-capacity pool; when the pool is full the
//! spawn is dropped and `None` is returned.

use glam::{Vec2, Vec3};
use tracing::{debug, info};

use holdout_ai::fsm::wander_direction;
use holdout_ai::profiles::get_profile;
use holdout_core::components::{Enemy, Item, Player, Projectile, Prop};
use holdout_core::constants::*;
use holdout_core::enums::{EnemyKind, EnemyState, GameMode, PropKind, WeaponKind};
use holdout_core::types::{lift, Camera, SimTime};

use crate::config::SimConfig;
use crate::pickups::ammo_pickup;
use crate::random::{random_point, roll};
use crate::weapons::Arsenal;
use crate::world::{GameWorld, WaveState};

/// Start a fresh wave-1 session on an empty world.
pub fn setup_session(world: &mut GameWorld, config: &SimConfig) {
    world.player = Player::default();
    world.camera = Camera {
        position: lift(world.player.position, PLAYER_EYE_HEIGHT),
        ..Camera::default()
    };
    world.arsenal = Arsenal::new();
    world.wave = WaveState {
        wave: 1,
        max_enemies: config.starting_enemies,
        live_enemies: config.starting_enemies,
        score: 0,
    };
    world.mode = GameMode::Playing;
    world.time = SimTime::default();
    world.hit_memo = None;

    spawn_props(world, config.prop_count);
    spawn_wave(world, config.starting_enemies);

    info!(
        seed = config.seed,
        enemies = world.enemies.active_count(),
        props = world.props.active_count(),
        "session started"
    );
}

/// Clear every pool and pending event.
pub fn teardown(world: &mut GameWorld) {
    world.enemies.clear();
    world.projectiles.clear();
    world.items.clear();
    world.props.clear();
    world.audio_events.clear();
    world.hit_memo = None;
}

/// Spawn one enemy of `kind` at a ground position, parameterized by its
/// behavior profile.
pub fn spawn_enemy(world: &mut GameWorld, kind: EnemyKind, position: Vec2) -> Option<usize> {
    let profile = get_profile(kind);
    let velocity = wander_direction(&mut world.rng);
    let enemy = Enemy {
        kind,
        health: profile.health,
        state: EnemyState::Wander,
        position: world.bounds.clamp(position),
        velocity,
        speed: profile.speed,
        attack_range: profile.attack_range,
        detect_range: profile.detect_range,
        anim_frame: profile.anim_frames - 1,
        anim_frames: profile.anim_frames,
        anim_timer: 0.0,
        frame_time: profile.frame_time,
        sprite_row: profile.sprite_row,
        attack: profile.attack,
        death: profile.death,
    };
    let slot = world.enemies.spawn(enemy);
    if slot.is_none() {
        debug!(?kind, "enemy pool full, spawn dropped");
    }
    slot
}

/// Place an item in the world.
pub fn spawn_item(world: &mut GameWorld, item: Item) -> Option<usize> {
    let slot = world.items.spawn(item);
    if slot.is_none() {
        debug!(pickup = ?item.pickup, "item pool full, spawn dropped");
    }
    slot
}

/// Launch a projectile from `origin` with the given velocity.
pub fn spawn_projectile(
    world: &mut GameWorld,
    origin: Vec3,
    velocity: Vec3,
    damage: i32,
) -> Option<usize> {
    let slot = world.projectiles.spawn(Projectile {
        position: origin,
        velocity,
        speed: 1.0,
        damage,
    });
    if slot.is_none() {
        debug!("projectile pool full, launch dropped");
    }
    slot
}

/// Scatter `count` props across the arena.
pub fn spawn_props(world: &mut GameWorld, count: usize) {
    for _ in 0..count {
        let index = roll(&mut world.rng, 0, PropKind::ALL.len() as i32 - 1) as usize;
        let kind = PropKind::ALL[index];
        let position = lift(random_point(&mut world.rng, &world.bounds), 0.0);
        if world.props.spawn(Prop { kind, position }).is_none() {
            debug!("prop pool full, spawn dropped");
            break;
        }
    }
}

/// Spawn `count` enemies at random positions. Kinds are drawn uniformly from
/// those unlocked by the current wave number.
pub fn spawn_wave(world: &mut GameWorld, count: u32) {
    let highest = (world.wave.wave as usize).min(EnemyKind::COUNT - 1) as i32;
    for _ in 0..count {
        let kind = EnemyKind::from_index(roll(&mut world.rng, 0, highest) as usize);
        let position = random_point(&mut world.rng, &world.bounds);
        spawn_enemy(world, kind, position);
    }
}

/// Spawn 3-7 ammo pickups at random positions, favoring the pistol.
pub fn spawn_ammo_drops(world: &mut GameWorld) {
    let count = roll(&mut world.rng, WAVE_AMMO_DROPS_MIN, WAVE_AMMO_DROPS_MAX);
    for _ in 0..count {
        let index = roll(&mut world.rng, -1, WeaponKind::COUNT as i32 - 1).max(0);
        let weapon = WeaponKind::from_index(index as usize);
        let position = lift(random_point(&mut world.rng, &world.bounds), 0.0);
        spawn_item(
            world,
            Item {
                position,
                pickup: ammo_pickup(weapon),
            },
        );
    }
}
