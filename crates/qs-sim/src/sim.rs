//! The `Simulation` struct and its tick loop.

use qs_core::{PolicyKind, SimRng, SimulationConfig, StationId, TerminationMode, Tick};
use qs_dispatch::{Destination, Dispatcher};
use qs_model::{Passenger, SharedQueue, Station};
use tracing::{debug, info};

use crate::{ArrivalProcess, BernoulliArrivals, SimObserver, SimResult};

/// One policy run: the tick loop plus all state it mutates.
///
/// Construction builds everything fresh — stations, queues, dispatcher, and
/// the run's own RNG — so there is no reset operation and nothing carries
/// over between policy runs.  Execution is strictly single-threaded within a
/// run; each tick completes fully before the next begins.
pub struct Simulation<A: ArrivalProcess> {
    /// Per-station state and accumulated statistics, indexed by `StationId`.
    pub stations: Vec<Station>,

    /// The shared waiting area.  Stays empty under every policy except
    /// single-shared-queue.
    pub shared: SharedQueue,

    policy:       PolicyKind,
    mode:         TerminationMode,
    horizon:      u64,
    log_interval: u64,
    dispatcher:   Dispatcher,
    arrivals:     A,
    rng:          SimRng,
    tick:         Tick,
    arrived:      u64,
    completed:    u64,
}

impl Simulation<BernoulliArrivals> {
    /// Build a production run for the policy at position `run_index` in the
    /// configured list.
    ///
    /// The run's RNG is derived from the master seed and `run_index`, so
    /// runs are reproducible and independent even when executed in parallel.
    pub fn from_config(
        config:    &SimulationConfig,
        policy:    PolicyKind,
        run_index: u64,
    ) -> SimResult<Self> {
        Simulation::new(
            config,
            policy,
            BernoulliArrivals::from_config(config),
            SimRng::for_run(config.seed, run_index),
        )
    }
}

impl<A: ArrivalProcess> Simulation<A> {
    /// Build a run with an explicit arrival process and RNG (tests script
    /// arrivals through this).
    pub fn new(
        config:   &SimulationConfig,
        policy:   PolicyKind,
        arrivals: A,
        rng:      SimRng,
    ) -> SimResult<Self> {
        config.validate()?;
        let stations = (0..config.num_stations)
            .map(|i| Station::new(StationId(i as u32)))
            .collect();
        Ok(Self {
            stations,
            shared: SharedQueue::new(),
            policy,
            mode: config.termination_mode,
            horizon: config.duration,
            log_interval: config.log_interval_ticks,
            dispatcher: Dispatcher::new(policy),
            arrivals,
            rng,
            tick: Tick::ZERO,
            arrived: 0,
            completed: 0,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the tick loop to completion.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.  After this returns, the statistics accessors and the
    /// public `stations`/`shared` fields describe the finished run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        debug!(policy = %self.policy, horizon = self.horizon, mode = ?self.mode, "run started");
        loop {
            let now = self.tick;
            if self.mode == TerminationMode::FixedHorizon && now.0 >= self.horizon {
                break;
            }
            observer.on_tick_start(now);

            // ── Phase 1: arrival trial + dispatch ─────────────────────────
            //
            // Arrivals stop at the horizon in both modes; drain mode keeps
            // the rest of the loop going afterwards.
            if now.0 < self.horizon {
                if let Some(passenger) = self.arrivals.sample(now, &mut self.rng) {
                    self.admit(passenger);
                }
            }

            // ── Phase 2: completion + refill for every station ────────────
            self.process_departures(now);

            // ── Phase 3: metrics + observer hooks ─────────────────────────
            self.observe_queues();
            observer.on_tick_end(now, self.waiting_total());
            if self.log_interval > 0 && now.0 % self.log_interval == 0 {
                observer.on_snapshot(now, &self.stations, &self.shared);
            }

            // Drain mode stops on the tick the system empties, without
            // advancing past it: that tick's completions are the last events
            // of the run and `effective_duration` lands exactly there.
            if self.mode == TerminationMode::DrainToEmpty
                && now.0 >= self.horizon
                && self.is_drained()
            {
                break;
            }
            self.tick.advance();
        }
        observer.on_run_end(self.tick);
        info!(
            policy = %self.policy,
            effective_duration = self.tick.0,
            arrived = self.arrived,
            completed = self.completed,
            "run complete"
        );
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Count and enqueue one arriving passenger at its policy-selected
    /// destination.
    fn admit(&mut self, passenger: Passenger) {
        self.arrived += 1;
        match self.dispatcher.select(&self.stations, &mut self.rng) {
            Destination::Shared => self.shared.push(passenger),
            Destination::Station(id) => self.stations[id.index()].enqueue(passenger),
        }
    }

    /// Completion then refill, for every station in ascending index order.
    ///
    /// The ordering is the tie-break rule: when the shared queue holds fewer
    /// passengers than there are idle stations, the lowest-indexed idle
    /// stations win.  Refill runs in the same tick a station frees up, so a
    /// station can hand one passenger off and take the next without an idle
    /// gap.
    fn process_departures(&mut self, now: Tick) {
        let shared_policy = self.policy.uses_shared_queue();
        for i in 0..self.stations.len() {
            if self.stations[i].complete_service(now) {
                self.completed += 1;
            }
            if self.stations[i].is_busy() {
                continue;
            }
            let next = if shared_policy {
                self.shared.pop()
            } else {
                self.stations[i].pop_waiting()
            };
            if let Some(passenger) = next {
                self.stations[i].begin_service(passenger, now);
            }
        }
    }

    /// Fold post-tick queue lengths into the high-water marks.  Under the
    /// single-queue policy only the shared mark is meaningful; under the
    /// others only the per-station marks are.
    fn observe_queues(&mut self) {
        if self.policy.uses_shared_queue() {
            self.shared.observe();
        } else {
            for station in &mut self.stations {
                station.observe_queue();
            }
        }
    }

    /// `true` when no station is busy and every queue is empty.
    fn is_drained(&self) -> bool {
        self.shared.is_empty()
            && self
                .stations
                .iter()
                .all(|s| !s.is_busy() && s.queue_len() == 0)
    }

    // ── Statistics accessors ──────────────────────────────────────────────

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// The tick at which the loop stopped (once `run` has returned); equal
    /// to the configured duration under fixed-horizon, possibly larger under
    /// drain-to-empty.
    #[inline]
    pub fn effective_duration(&self) -> Tick {
        self.tick
    }

    /// Passengers admitted over the whole run.
    #[inline]
    pub fn total_arrived(&self) -> u64 {
        self.arrived
    }

    /// Passengers whose service finished.
    #[inline]
    pub fn total_completed(&self) -> u64 {
        self.completed
    }

    /// Passengers admitted but not completed: still waiting or mid-service.
    /// Zero after a drained run.
    #[inline]
    pub fn unfinished(&self) -> u64 {
        self.arrived - self.completed
    }

    /// Passengers currently waiting across all queues.
    pub fn waiting_total(&self) -> usize {
        self.shared.len() + self.stations.iter().map(Station::queue_len).sum::<usize>()
    }

    /// Stations currently serving a passenger.
    pub fn in_service(&self) -> usize {
        self.stations.iter().filter(|s| s.is_busy()).count()
    }
}
