//! Dispatch-policy vocabulary shared across all simulation crates.
//!
//! The set of policies is closed: configuration names are resolved to a
//! `PolicyKind` exactly once, during validation, and an unrecognized name
//! fails there — never mid-run.  The per-run dispatch state (round-robin
//! cursor, RNG use) lives in `qs-dispatch`; this enum is only the vocabulary.

use crate::error::ConfigError;

/// Which queue topology and dispatch rule a run uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PolicyKind {
    /// One shared FIFO; idle stations claim from it in ascending index order.
    SingleQueue,
    /// Arrivals cycle through stations 0..N-1 regardless of load.
    RoundRobin,
    /// Arrivals join the station with the shortest queue (ties → lowest index).
    ShortestQueue,
    /// Arrivals join a uniformly random station.
    Random,
}

impl PolicyKind {
    /// Every policy, in the order the reference comparison runs them.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::SingleQueue,
        PolicyKind::RoundRobin,
        PolicyKind::ShortestQueue,
        PolicyKind::Random,
    ];

    /// Resolve a configuration name.
    ///
    /// This is the only place an unknown policy can surface, and it runs
    /// before any simulation starts.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "single_queue"   => Ok(PolicyKind::SingleQueue),
            "round_robin"    => Ok(PolicyKind::RoundRobin),
            "shortest_queue" => Ok(PolicyKind::ShortestQueue),
            "random"         => Ok(PolicyKind::Random),
            other            => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }

    /// The configuration-file name, also used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::SingleQueue   => "single_queue",
            PolicyKind::RoundRobin    => "round_robin",
            PolicyKind::ShortestQueue => "shortest_queue",
            PolicyKind::Random        => "random",
        }
    }

    /// `true` if arrivals go to the shared queue instead of a station queue.
    #[inline]
    pub fn uses_shared_queue(self) -> bool {
        matches!(self, PolicyKind::SingleQueue)
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::from_name(s)
    }
}
