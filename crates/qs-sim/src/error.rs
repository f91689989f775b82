use qs_core::ConfigError;
use thiserror::Error;

/// Errors surfaced while constructing a run.
///
/// Once a run is constructed nothing in the tick loop can fail: invariant
/// violations are programming defects guarded by assertions, not recoverable
/// conditions.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SimResult<T> = Result<T, SimError>;
