//! `qs-core` — foundational types for the `queuesim` workspace.
//!
//! This crate is a dependency of every other `qs-*` crate.  It intentionally
//! has no `qs-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! and `serde`/`serde_json` for the configuration loader).
//!
//! # What lives here
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`ids`]    | `StationId`                                        |
//! | [`time`]   | `Tick`                                             |
//! | [`rng`]    | `SimRng` (per-run seedable RNG)                    |
//! | [`policy`] | `PolicyKind` (closed dispatch-policy vocabulary)   |
//! | [`config`] | `SimulationConfig`, `TerminationMode`, JSON loader |
//! | [`error`]  | `ConfigError`, `CoreResult`                        |

pub mod config;
pub mod error;
pub mod ids;
pub mod policy;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DurationRange, SimulationConfig, TerminationMode};
pub use error::{ConfigError, CoreResult};
pub use ids::StationId;
pub use policy::PolicyKind;
pub use rng::SimRng;
pub use time::Tick;
