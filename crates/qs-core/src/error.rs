//! Configuration error type.
//!
//! All variants are fatal at startup: a failed load or validation means no
//! simulation run is attempted.  Nothing here is retried — the simulation has
//! no transient failure modes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading or validating a [`SimulationConfig`].
///
/// [`SimulationConfig`]: crate::SimulationConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("configuration file {} is malformed: {source}", .path.display())]
    Malformed {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown dispatch policy `{0}`")]
    UnknownPolicy(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "drain-to-empty would not terminate: expected service demand \
         {demand:.3} station-ticks per tick exceeds capacity {capacity}"
    )]
    Unstable { demand: f64, capacity: usize },

    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for configuration handling.
pub type CoreResult<T> = Result<T, ConfigError>;
