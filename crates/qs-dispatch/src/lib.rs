//! `qs-dispatch` — where does a newly arrived passenger wait?
//!
//! A [`Dispatcher`] is built once per run from the configured
//! [`PolicyKind`][qs_core::PolicyKind] and consulted on every arrival.  The
//! policy set is closed; per-run mutable state (the round-robin cursor) lives
//! inside the variant, and the random variant draws from the run's own seeded
//! RNG so runs stay reproducible and independent.

pub mod dispatch;


pub use dispatch::{Destination, Dispatcher};
