//! Arrival generation: at most one new passenger per tick.

use qs_core::{DurationRange, SimRng, SimulationConfig, Tick};
use qs_model::Passenger;

/// Source of new passengers, consulted once per tick.
///
/// The production implementation is [`BernoulliArrivals`]; tests substitute
/// scripted sequences to pin down exact traces.  Implementations draw
/// randomness only from the `SimRng` handed in by the driver, which is what
/// makes whole runs replayable from a seed.
pub trait ArrivalProcess {
    /// Produce the passenger arriving at `now`, if any.
    fn sample(&mut self, now: Tick, rng: &mut SimRng) -> Option<Passenger>;
}

/// Independent per-tick Bernoulli arrival trial with a uniform
/// service-duration sampler.
///
/// `probability` is used directly as the chance of exactly one arrival this
/// tick.  It is *not* a continuous-time rate: no Poisson conversion is
/// applied, matching the model this engine reproduces.
#[derive(Debug, Clone)]
pub struct BernoulliArrivals {
    probability:   f64,
    service_range: DurationRange,
}

impl BernoulliArrivals {
    /// # Panics
    /// Panics in debug mode on a probability outside `[0, 1]` or a
    /// non-positive duration range — both are rejected earlier by
    /// configuration validation.
    pub fn new(probability: f64, service_range: DurationRange) -> Self {
        debug_assert!((0.0..=1.0).contains(&probability));
        debug_assert!(service_range.min > 0.0 && service_range.min <= service_range.max);
        Self {
            probability,
            service_range,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.arrival_probability, config.service_duration_range)
    }
}

impl ArrivalProcess for BernoulliArrivals {
    fn sample(&mut self, now: Tick, rng: &mut SimRng) -> Option<Passenger> {
        if !rng.gen_bool(self.probability) {
            return None;
        }
        let duration = rng.gen_range(self.service_range.min..=self.service_range.max);
        Some(Passenger::new(now, duration))
    }
}
