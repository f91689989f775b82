//! The dispatcher variants and their selection rules.

use qs_core::{PolicyKind, SimRng, StationId};
use qs_model::Station;

/// Where an arriving passenger is sent to wait.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Destination {
    /// The run-wide shared FIFO (single-shared-queue policy only).
    Shared,
    /// A specific station's own queue.
    Station(StationId),
}

/// Per-run dispatch state: one variant per policy, chosen at run
/// construction and never re-examined by name afterwards.
#[derive(Debug)]
pub enum Dispatcher {
    /// Every arrival joins the shared queue; stations never receive direct
    /// enqueues.
    SingleQueue,
    /// Cursor walks 0, 1, …, N-1, 0, … and advances on every arrival
    /// regardless of the chosen station's load.
    RoundRobin { cursor: usize },
    /// Left-to-right scan for the shortest station queue; the first minimum
    /// wins, so ties resolve to the lowest index.
    ShortestQueue,
    /// Uniformly random station from the run's seeded RNG.
    Random,
}

impl Dispatcher {
    /// Build the variant for `kind` with freshly initialized per-run state.
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::SingleQueue   => Dispatcher::SingleQueue,
            PolicyKind::RoundRobin    => Dispatcher::RoundRobin { cursor: 0 },
            PolicyKind::ShortestQueue => Dispatcher::ShortestQueue,
            PolicyKind::Random        => Dispatcher::Random,
        }
    }

    /// The vocabulary value this dispatcher was built from.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Dispatcher::SingleQueue      => PolicyKind::SingleQueue,
            Dispatcher::RoundRobin { .. } => PolicyKind::RoundRobin,
            Dispatcher::ShortestQueue    => PolicyKind::ShortestQueue,
            Dispatcher::Random           => PolicyKind::Random,
        }
    }

    /// Choose the destination queue for one arriving passenger.
    ///
    /// Reads station queue lengths only; the caller performs the actual
    /// enqueue.  `stations` must be non-empty (guaranteed by configuration
    /// validation).
    pub fn select(&mut self, stations: &[Station], rng: &mut SimRng) -> Destination {
        debug_assert!(!stations.is_empty(), "dispatch over an empty station pool");
        match self {
            Dispatcher::SingleQueue => Destination::Shared,

            Dispatcher::RoundRobin { cursor } => {
                let chosen = StationId(*cursor as u32);
                *cursor = (*cursor + 1) % stations.len();
                Destination::Station(chosen)
            }

            Dispatcher::ShortestQueue => {
                // Explicit left-to-right scan: a strict `<` keeps the first
                // (lowest-index) station among equals.
                let mut best = 0usize;
                for (i, station) in stations.iter().enumerate().skip(1) {
                    if station.queue_len() < stations[best].queue_len() {
                        best = i;
                    }
                }
                Destination::Station(StationId(best as u32))
            }

            Dispatcher::Random => {
                let i = rng.gen_range(0..stations.len());
                Destination::Station(StationId(i as u32))
            }
        }
    }
}
