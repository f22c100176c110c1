//! Error types for the simulation engine.
//!
//! Gameplay never fails: exhausted pools drop spawns and stats clamp.
//! Only configuration can be rejected.

/// Errors that can occur while building a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A configuration value is out of its valid range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience result type for simulation setup.
pub type SimResult<T> = Result<T, SimError>;
