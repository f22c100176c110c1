//! Simulation engine for HOLDOUT.
//!
//! Owns every entity pool and the session state, runs the per-frame systems
//! in a fixed order, and produces `FrameSnapshot`s for the renderer and
//! audio layers.

pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod pickups;
pub mod pool;
pub mod random;
pub mod systems;
pub mod weapons;
pub mod world;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use error::{SimError, SimResult};
pub use holdout_core as core;
pub use world::GameWorld;
