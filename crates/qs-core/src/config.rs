//! Run configuration and the JSON file loader.
//!
//! The configuration is immutable after construction and is passed into each
//! policy run; there is no shared mutable parameter state and no "reset"
//! operation — every run builds fresh simulation state from this value.
//!
//! # File format
//!
//! ```json
//! {
//!   "num_stations": 3,
//!   "arrival_probability": 0.4,
//!   "duration": 10000,
//!   "policies": ["single_queue", "round_robin", "shortest_queue", "random"],
//!   "termination_mode": "drain_to_empty",
//!   "service_duration_range": { "min": 0.5, "max": 1.5 },
//!   "seed": 42
//! }
//! ```
//!
//! `termination_mode`, `seed`, and `log_interval_ticks` are optional.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreResult};
use crate::policy::PolicyKind;

// ── TerminationMode ───────────────────────────────────────────────────────────

/// When the tick loop stops.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationMode {
    /// Stop exactly at `duration`, leaving queued/in-service passengers
    /// unfinished.  Legacy mode, kept as an explicit option.
    FixedHorizon,
    /// Stop arrivals at `duration` but keep ticking until every station is
    /// idle and every queue is empty.  Canonical default: waiting-time
    /// statistics then cover every admitted passenger.
    #[default]
    DrainToEmpty,
}

// ── DurationRange ─────────────────────────────────────────────────────────────

/// Closed real-valued range for the uniform service-duration sampler.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DurationRange {
    pub min: f64,
    pub max: f64,
}

impl DurationRange {
    /// Mean of the uniform distribution over `[min, max]`.
    #[inline]
    pub fn mean(self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Top-level simulation configuration, loaded once at startup.
///
/// Policies are kept as raw names so an unrecognized entry is reported as
/// [`ConfigError::UnknownPolicy`] during validation rather than as a generic
/// parse failure; resolve them with [`policy_kinds`].
///
/// [`policy_kinds`]: SimulationConfig::policy_kinds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of parallel service stations.  Must be ≥ 1.
    pub num_stations: usize,

    /// Per-tick Bernoulli probability of exactly one arrival, in `[0, 1]`.
    ///
    /// This is a literal per-tick probability, not a continuous-time rate;
    /// no Poisson conversion is performed.
    pub arrival_probability: f64,

    /// Horizon tick count: the hard stop under fixed-horizon, the
    /// arrival cutoff under drain-to-empty.
    pub duration: u64,

    /// Policy names to run, in order.  Resolved by [`Self::policy_kinds`].
    pub policies: Vec<String>,

    /// Loop stop condition.  Defaults to drain-to-empty when omitted.
    #[serde(default)]
    pub termination_mode: TerminationMode,

    /// Bounds for the uniform service-duration sampler, in ticks.
    pub service_duration_range: DurationRange,

    /// Master RNG seed.  Each policy run derives an independent child seed
    /// from this and its position in `policies`.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Emit a queue-state snapshot every N ticks (0 disables snapshots).
    #[serde(default)]
    pub log_interval_ticks: u64,
}

fn default_seed() -> u64 {
    42
}

impl SimulationConfig {
    /// Load and validate a configuration from a JSON file.
    ///
    /// A missing file maps to [`ConfigError::Missing`], a parse failure to
    /// [`ConfigError::Malformed`]; both are fatal before any run starts.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::Missing(path.to_path_buf())
            } else {
                ConfigError::Io(e)
            }
        })?;
        let config: SimulationConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured policy names to their [`PolicyKind`]s.
    pub fn policy_kinds(&self) -> CoreResult<Vec<PolicyKind>> {
        self.policies
            .iter()
            .map(|name| PolicyKind::from_name(name))
            .collect()
    }

    /// Check every invariant the engine relies on.
    ///
    /// Runs before any simulation is constructed, so a bad value can never
    /// surface mid-run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_stations == 0 {
            return Err(ConfigError::Invalid("num_stations must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability)
            || !self.arrival_probability.is_finite()
        {
            return Err(ConfigError::Invalid(format!(
                "arrival_probability {} is outside [0, 1]",
                self.arrival_probability
            )));
        }
        let range = self.service_duration_range;
        if !range.min.is_finite() || !range.max.is_finite() || range.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "service_duration_range ({}, {}) must be positive and finite",
                range.min, range.max
            )));
        }
        if range.min > range.max {
            return Err(ConfigError::Invalid(format!(
                "service_duration_range min {} exceeds max {}",
                range.min, range.max
            )));
        }
        if self.policies.is_empty() {
            return Err(ConfigError::Invalid("policies list is empty".into()));
        }
        self.policy_kinds()?;

        // Drain-to-empty must provably terminate: expected service demand per
        // tick (arrival probability × mean service duration, in station-ticks)
        // may not exceed the pool's capacity of one station-tick per station.
        if self.termination_mode == TerminationMode::DrainToEmpty {
            let demand = self.arrival_probability * range.mean();
            if demand > self.num_stations as f64 {
                return Err(ConfigError::Unstable {
                    demand,
                    capacity: self.num_stations,
                });
            }
        }
        Ok(())
    }
}
