//! A single service station and its accumulated statistics.

use std::collections::VecDeque;

use qs_core::{StationId, Tick};

use crate::Passenger;

/// One service resource.
///
/// Occupancy is encoded structurally: the station is **Busy** exactly when
/// `current` holds a passenger, so the "busy station with no passenger"
/// contradiction cannot be represented.  The per-station `waiting` queue is
/// used by every policy except single-shared-queue, which routes all waiting
/// passengers through [`SharedQueue`][crate::SharedQueue] instead.
///
/// Statistics (`busy_ticks`, `max_queue_len`, `waiting_times`) accumulate
/// monotonically over one run and are read out by the report layer at the
/// end.
#[derive(Debug)]
pub struct Station {
    id:            StationId,
    current:       Option<Passenger>,
    waiting:       VecDeque<Passenger>,
    busy_ticks:    u64,
    max_queue_len: usize,
    waiting_times: Vec<u64>,
}

impl Station {
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            current:       None,
            waiting:       VecDeque::new(),
            busy_ticks:    0,
            max_queue_len: 0,
            waiting_times: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Passengers waiting in this station's own queue.
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Append a passenger to this station's queue (per-station policies).
    pub fn enqueue(&mut self, passenger: Passenger) {
        self.waiting.push_back(passenger);
    }

    /// Pop the longest-waiting passenger from this station's queue.
    pub fn pop_waiting(&mut self) -> Option<Passenger> {
        self.waiting.pop_front()
    }

    /// Completion check (Busy → Idle).
    ///
    /// If the current passenger's service duration has elapsed by `now`, add
    /// the served ticks to `busy_ticks`, release the passenger, and return
    /// `true`.  A station that frees up here may be refilled again within
    /// the same tick.
    pub fn complete_service(&mut self, now: Tick) -> bool {
        let Some(passenger) = self.current.take_if(|p| p.service_complete(now)) else {
            return false;
        };
        let start = passenger
            .service_start_tick()
            .expect("in-service passenger never began service");
        self.busy_ticks += now.since(start);
        true
    }

    /// Refill transition (Idle → Busy): start serving `passenger` at `now`,
    /// recording its waiting time.
    ///
    /// # Panics
    /// Panics in debug mode if the station is already busy.
    pub fn begin_service(&mut self, mut passenger: Passenger, now: Tick) {
        debug_assert!(
            self.current.is_none(),
            "{} asked to serve a passenger while busy",
            self.id
        );
        let waited = passenger.begin_service(now);
        self.waiting_times.push(waited);
        self.current = Some(passenger);
    }

    /// Record the post-tick queue length into the high-water mark.
    pub fn observe_queue(&mut self) {
        self.max_queue_len = self.max_queue_len.max(self.waiting.len());
    }

    // ── Statistics accessors ──────────────────────────────────────────────

    /// Total ticks this station spent serving completed passengers.
    #[inline]
    pub fn busy_ticks(&self) -> u64 {
        self.busy_ticks
    }

    /// High-water mark of this station's own queue.
    #[inline]
    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }

    /// Waiting time of every passenger that began service here, in order.
    #[inline]
    pub fn waiting_times(&self) -> &[u64] {
        &self.waiting_times
    }

    /// How many passengers began service at this station.
    #[inline]
    pub fn served_count(&self) -> usize {
        self.waiting_times.len()
    }
}
