//! Simulation engine: the frame loop that drives a session.
//!
//! `SimulationEngine` owns the game world, processes player commands, runs
//! all systems in a fixed order, and produces `FrameSnapshot`s. Completely
//! headless (no renderer or audio backend), enabling deterministic testing.

use std::collections::VecDeque;

use tracing::info;

use holdout_core::commands::{FrameInput, PlayerCommand};
use holdout_core::enums::GameMode;
use holdout_core::state::FrameSnapshot;
use holdout_core::types::SimTime;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::systems;
use crate::world::GameWorld;
use crate::world_setup;

/// The simulation engine. Owns the game world and all sim state.
pub struct SimulationEngine {
    world: GameWorld,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Validate `config` and start a wave-1 session.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut world = GameWorld::new(&config);
        world_setup::setup_session(&mut world, &config);
        Ok(Self {
            world,
            config,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. Terminal modes skip every system.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> FrameSnapshot {
        self.process_commands();

        let dt = dt.max(0.0) * self.config.time_scale;
        if self.world.mode == GameMode::Playing {
            self.run_systems(dt, input);
            self.world.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.world.audio_events);
        systems::snapshot::build_snapshot(&self.world, audio_events)
    }

    /// Get the current game mode.
    pub fn mode(&self) -> GameMode {
        self.world.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.world.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the game world.
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable world access for tests that stage a situation directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectWeapon { weapon } => {
                if self.world.mode == GameMode::Playing {
                    systems::weapon_fire::select_weapon(&mut self.world, weapon);
                }
            }
            PlayerCommand::NextWeapon => {
                if self.world.mode == GameMode::Playing {
                    systems::weapon_fire::cycle_weapon(&mut self.world);
                }
            }
            PlayerCommand::Restart => {
                info!(from = ?self.world.mode, "restarting session");
                world_setup::teardown(&mut self.world);
                world_setup::setup_session(&mut self.world, &self.config);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &FrameInput) {
        let world = &mut self.world;
        // 1. View rotation + player movement
        systems::view::run(
            world,
            input,
            dt,
            self.config.mouse_sensitivity,
            self.config.move_speed,
        );
        // 2. Weapon animation + trigger
        systems::weapon_fire::run(world, input.fire, dt);
        // 3. Enemy AI
        systems::enemy_ai::run(world, dt);
        // 4. Item pickups
        systems::items::run(world);
        // 5. Projectiles
        systems::projectiles::run(world, dt);
        // 6. Wave clear check
        systems::wave_director::run(world);
    }
}
