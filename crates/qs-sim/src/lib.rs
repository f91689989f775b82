//! `qs-sim` — the tick loop driver.
//!
//! # Per-tick phases
//!
//! ```text
//! for each tick until the termination condition holds:
//!   ① Arrival    — one Bernoulli trial (only while tick < horizon); on
//!                  success the dispatcher picks a destination queue.
//!   ② Departures — for every station in ascending index order:
//!                    completion check (Busy → Idle), then
//!                    refill check     (Idle → Busy, same tick).
//!   ③ Metrics    — post-tick queue lengths fold into high-water marks;
//!                  observer hooks fire.
//!   ④ Advance    — tick += 1.
//! ```
//!
//! # Termination
//!
//! | Mode             | Stop condition                                        |
//! |------------------|-------------------------------------------------------|
//! | `fixed_horizon`  | exactly at `duration`; queued/in-service passengers   |
//! |                  | are reported as unfinished                            |
//! | `drain_to_empty` | arrivals cease at `duration`; the loop runs until the |
//! |                  | system is empty and stops on the tick that empties it |
//!
//! Each run owns all of its state: stations, queues, dispatcher, and RNG are
//! built fresh per policy and discarded at the end, so runs for different
//! policies are independent and may execute on separate threads.

pub mod arrivals;
pub mod error;
pub mod observer;
pub mod sim;


pub use arrivals::{ArrivalProcess, BernoulliArrivals};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
