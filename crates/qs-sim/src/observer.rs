//! Run observer trait for progress reporting and data collection.

use qs_core::Tick;
use qs_model::{SharedQueue, Station};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `waiting` is the total number of passengers waiting in queues (shared
    /// plus per-station) after this tick's departures.
    fn on_tick_end(&mut self, _tick: Tick, _waiting: usize) {}

    /// Called every `log_interval_ticks` ticks (never when the interval is 0).
    ///
    /// Provides read-only access to the full queue state so progress loggers
    /// can report queue depths without the driver knowing about any specific
    /// output format.
    fn on_snapshot(&mut self, _tick: Tick, _stations: &[Station], _shared: &SharedQueue) {}

    /// Called once after the loop stops; `final_tick` is the effective
    /// duration of the run.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
