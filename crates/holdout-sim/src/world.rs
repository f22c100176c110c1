//! The game world: every entity pool plus session counters, passed by
//! `&mut` into each system.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{Enemy, Item, Player, Projectile, Prop};
use holdout_core::enums::{GameMode, Sound};
use holdout_core::events::AudioEvent;
use holdout_core::types::{ArenaBounds, Camera, SimTime};

use crate::config::SimConfig;
use crate::pool::Pool;
use crate::weapons::Arsenal;

/// Wave progression and score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveState {
    pub wave: u32,
    /// Enemy target of the current wave.
    pub max_enemies: u32,
    /// Enemies of the current wave not yet killed.
    pub live_enemies: u32,
    pub score: u32,
}

/// The most recent enemy hit, used to suppress duplicate hit sounds when
/// the same slot is hit again at the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitMemo {
    pub slot: usize,
    pub time: f64,
}

/// All mutable simulation state.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub enemies: Pool<Enemy>,
    pub projectiles: Pool<Projectile>,
    pub items: Pool<Item>,
    pub props: Pool<Prop>,
    pub player: Player,
    pub camera: Camera,
    pub arsenal: Arsenal,
    pub wave: WaveState,
    pub mode: GameMode,
    pub time: SimTime,
    pub bounds: ArenaBounds,
    pub rng: ChaCha8Rng,
    /// Audio requested since the last snapshot.
    pub audio_events: Vec<AudioEvent>,
    pub hit_memo: Option<HitMemo>,
}

impl GameWorld {
    /// Empty world sized by `config`. Nothing is spawned yet.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            enemies: Pool::new(config.enemy_capacity),
            projectiles: Pool::new(config.projectile_capacity),
            items: Pool::new(config.item_capacity),
            props: Pool::new(config.prop_capacity),
            player: Player::default(),
            camera: Camera::default(),
            arsenal: Arsenal::new(),
            wave: WaveState::default(),
            mode: GameMode::Playing,
            time: SimTime::default(),
            bounds: ArenaBounds::new(config.arena_half_extent, config.arena_margin),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            audio_events: Vec::new(),
            hit_memo: None,
        }
    }

    /// Request a non-positional effect.
    pub fn play(&mut self, sound: Sound, pitch: f32, volume: f32) {
        self.audio_events.push(AudioEvent::Play {
            sound,
            pitch,
            volume,
        });
    }

    /// Request an effect at a world position.
    pub fn play_at(&mut self, sound: Sound, position: Vec3) {
        self.audio_events.push(AudioEvent::PlayAt { sound, position });
    }
}
