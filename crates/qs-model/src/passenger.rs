//! A single arriving entity.

use qs_core::Tick;

/// One passenger moving through the system.
///
/// The arrival tick and service duration are fixed at creation; the service
/// start tick is set exactly once, when a station claims the passenger.
/// Ownership transfers from the arrival generator to a queue to a station —
/// a passenger is never shared.
///
/// Service durations are real-valued (the sampler draws from a closed
/// `[min, max]` range of fractional ticks) while the clock is integral, so a
/// duration of 1.5 occupies a station for 2 whole ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    arrival_tick:       Tick,
    service_duration:   f64,
    service_start_tick: Option<Tick>,
}

impl Passenger {
    /// Create a passenger arriving at `arrival_tick`.
    ///
    /// # Panics
    /// Panics in debug mode if `service_duration` is not positive.
    pub fn new(arrival_tick: Tick, service_duration: f64) -> Self {
        debug_assert!(
            service_duration > 0.0,
            "service duration must be positive, got {service_duration}"
        );
        Self {
            arrival_tick,
            service_duration,
            service_start_tick: None,
        }
    }

    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    #[inline]
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// The tick service began, or `None` while still waiting.
    #[inline]
    pub fn service_start_tick(&self) -> Option<Tick> {
        self.service_start_tick
    }

    /// Mark service as started at `now` and return the whole-tick waiting
    /// time `now - arrival_tick`.
    ///
    /// # Panics
    /// Panics in debug mode if service already started or `now` precedes the
    /// arrival tick.
    pub fn begin_service(&mut self, now: Tick) -> u64 {
        debug_assert!(
            self.service_start_tick.is_none(),
            "begin_service called twice (previous start {:?})",
            self.service_start_tick
        );
        self.service_start_tick = Some(now);
        now.since(self.arrival_tick)
    }

    /// `true` once at least `service_duration` ticks have elapsed since
    /// service started.  Always `false` for a passenger still waiting.
    pub fn service_complete(&self, now: Tick) -> bool {
        match self.service_start_tick {
            Some(start) => now.since(start) as f64 >= self.service_duration,
            None => false,
        }
    }
}
