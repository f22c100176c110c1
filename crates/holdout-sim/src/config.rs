//! Configuration for starting a new simulation.

use serde::{Deserialize, Serialize};

use holdout_core::constants::*;

use crate::error::{SimError, SimResult};

/// Tunables for one simulation. Every field has a default, so a partial
/// JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Multiplier applied to every frame delta (1.0 = normal).
    pub time_scale: f32,
    pub enemy_capacity: usize,
    pub projectile_capacity: usize,
    pub item_capacity: usize,
    pub prop_capacity: usize,
    /// Props scattered at session start.
    pub prop_count: usize,
    /// Enemies in wave 1.
    pub starting_enemies: u32,
    pub arena_half_extent: f32,
    pub arena_margin: f32,
    /// Radians of view rotation per pointer unit.
    pub mouse_sensitivity: f32,
    /// Player ground speed (units/s).
    pub move_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            enemy_capacity: ENEMY_CAPACITY,
            projectile_capacity: PROJECTILE_CAPACITY,
            item_capacity: ITEM_CAPACITY,
            prop_capacity: PROP_CAPACITY,
            prop_count: PROP_COUNT,
            starting_enemies: STARTING_ENEMIES,
            arena_half_extent: ARENA_HALF_EXTENT,
            arena_margin: ARENA_MARGIN,
            mouse_sensitivity: 0.0025,
            move_speed: 8.0,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the enemy pool capacity (which is also the victory threshold).
    pub fn with_enemy_capacity(mut self, capacity: usize) -> Self {
        self.enemy_capacity = capacity;
        self
    }

    /// Set the size of wave 1.
    pub fn with_starting_enemies(mut self, count: u32) -> Self {
        self.starting_enemies = count;
        self
    }

    /// Set the time scale (clamped to 0-4).
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale.clamp(0.0, 4.0);
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> SimResult<()> {
        let capacities = [
            ("enemy_capacity", self.enemy_capacity),
            ("projectile_capacity", self.projectile_capacity),
            ("item_capacity", self.item_capacity),
            ("prop_capacity", self.prop_capacity),
        ];
        for (name, capacity) in capacities {
            if capacity == 0 {
                return Err(SimError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if self.starting_enemies as usize > self.enemy_capacity {
            return Err(SimError::InvalidConfig(format!(
                "starting_enemies ({}) exceeds enemy_capacity ({})",
                self.starting_enemies, self.enemy_capacity
            )));
        }
        if self.prop_count > self.prop_capacity {
            return Err(SimError::InvalidConfig(format!(
                "prop_count ({}) exceeds prop_capacity ({})",
                self.prop_count, self.prop_capacity
            )));
        }
        if self.arena_half_extent.is_nan() || self.arena_half_extent <= 0.0 {
            return Err(SimError::InvalidConfig(
                "arena_half_extent must be positive".into(),
            ));
        }
        if self.arena_margin.is_nan()
            || self.arena_margin < 0.0
            || self.arena_margin >= self.arena_half_extent
        {
            return Err(SimError::InvalidConfig(
                "arena_margin must be non-negative and smaller than arena_half_extent".into(),
            ));
        }
        if !(0.0..=4.0).contains(&self.time_scale) {
            return Err(SimError::InvalidConfig(
                "time_scale must be within 0-4".into(),
            ));
        }
        if !self.mouse_sensitivity.is_finite() || !self.move_speed.is_finite() {
            return Err(SimError::InvalidConfig(
                "mouse_sensitivity and move_speed must be finite".into(),
            ));
        }
        Ok(())
    }
}
