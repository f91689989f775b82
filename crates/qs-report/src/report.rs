//! Derived statistics for one finished run.

use qs_core::PolicyKind;
use qs_model::Station;
use qs_sim::{ArrivalProcess, Simulation};

/// Final statistics for a single station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReport {
    /// Station index.
    pub station: u32,
    /// Passengers that began service here.
    pub served: u64,
    /// Mean waiting time of served passengers, in ticks (0 if none served).
    pub avg_waiting_time: f64,
    /// Largest waiting time of served passengers, in ticks (0 if none).
    pub max_waiting_time: u64,
    /// `busy_ticks / effective_duration * 100` (0 for a zero-tick run).
    pub occupancy_pct: f64,
    /// High-water mark of this station's own queue.  `None` under the
    /// single-shared-queue policy, where queue length belongs to the run.
    pub max_queue_len: Option<usize>,
}

/// Final statistics for one policy run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub policy: PolicyKind,
    /// Tick count at which the loop actually stopped.
    pub effective_duration: u64,
    /// Largest queue length observed anywhere in the run: the shared queue's
    /// mark under single-shared-queue, the per-station maximum otherwise.
    pub max_queue_len: usize,
    pub total_arrived: u64,
    pub total_completed: u64,
    /// Passengers still queued or mid-service when the loop stopped.
    /// Always 0 after a drained run.
    pub unfinished: u64,
    /// Mean waiting time across every passenger that began service, in
    /// ticks (0 if none did).
    pub avg_waiting_time: f64,
    /// Largest waiting time across every passenger that began service.
    pub max_waiting_time: u64,
    pub stations: Vec<StationReport>,
}

impl RunReport {
    /// Derive the report from a finished run.
    ///
    /// Streams over the per-station accumulators — running sums, counts, and
    /// maxima — so nothing here depends on how many passengers the run
    /// processed.
    pub fn from_run<A: ArrivalProcess>(sim: &Simulation<A>) -> Self {
        let effective = sim.effective_duration().0;
        let shared_policy = sim.policy().uses_shared_queue();

        let mut wait_sum: u64 = 0;
        let mut wait_count: u64 = 0;
        let mut wait_max: u64 = 0;
        let stations: Vec<StationReport> = sim
            .stations
            .iter()
            .map(|station| {
                let (sum, max) = station
                    .waiting_times()
                    .iter()
                    .fold((0u64, 0u64), |(s, m), &w| (s + w, m.max(w)));
                wait_sum += sum;
                wait_count += station.served_count() as u64;
                wait_max = wait_max.max(max);
                station_report(station, sum, max, effective, shared_policy)
            })
            .collect();

        let max_queue_len = if shared_policy {
            sim.shared.max_len()
        } else {
            stations
                .iter()
                .filter_map(|s| s.max_queue_len)
                .max()
                .unwrap_or(0)
        };

        RunReport {
            policy: sim.policy(),
            effective_duration: effective,
            max_queue_len,
            total_arrived: sim.total_arrived(),
            total_completed: sim.total_completed(),
            unfinished: sim.unfinished(),
            avg_waiting_time: mean(wait_sum, wait_count),
            max_waiting_time: wait_max,
            stations,
        }
    }
}

fn station_report(
    station: &Station,
    wait_sum: u64,
    wait_max: u64,
    effective: u64,
    shared_policy: bool,
) -> StationReport {
    let served = station.served_count() as u64;
    let occupancy_pct = if effective == 0 {
        0.0
    } else {
        station.busy_ticks() as f64 / effective as f64 * 100.0
    };
    StationReport {
        station: station.id().0,
        served,
        avg_waiting_time: mean(wait_sum, served),
        max_waiting_time: wait_max,
        occupancy_pct,
        max_queue_len: (!shared_policy).then(|| station.max_queue_len()),
    }
}

/// Mean with the degenerate case pinned to 0 instead of a division fault.
fn mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
