//! `qs-report` — turning a finished run into numbers people can read.
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`report`] | `RunReport`, `StationReport` — derived statistics    |
//! | [`render`] | fixed-width text table (`Display` on `RunReport`)    |
//! | [`csv`]    | `CsvWriter` — station rows + run summaries           |
//! | [`error`]  | `ReportError`, `ReportResult`                        |
//!
//! Derivation streams over the per-station state the run accumulated;
//! no passenger list is retained anywhere, so memory stays bounded for
//! arbitrarily long drain runs.  Degenerate inputs (no served passengers,
//! zero-tick runs) produce zeros, never a division fault.

pub mod csv;
pub mod error;
pub mod render;
pub mod report;


pub use self::csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use report::{RunReport, StationReport};
