//! Enemy AI for HOLDOUT.
//!
//! Implements the enemy behavior state machine and the per-kind
//! behavior profiles that parameterize it.

pub mod fsm;
pub mod profiles;

pub use holdout_core as core;
