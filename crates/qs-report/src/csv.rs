//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `station_stats.csv` — one row per station per run
//! - `run_summaries.csv` — one row per policy run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::ReportResult;
use crate::RunReport;

/// Writes run reports to two CSV files.
pub struct CsvWriter {
    stations:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut stations = Writer::from_path(dir.join("station_stats.csv"))?;
        stations.write_record([
            "policy",
            "station",
            "served",
            "avg_waiting_time",
            "max_waiting_time",
            "occupancy_pct",
            "max_queue_len",
        ])?;

        let mut summaries = Writer::from_path(dir.join("run_summaries.csv"))?;
        summaries.write_record([
            "policy",
            "effective_duration",
            "max_queue_len",
            "total_arrived",
            "total_completed",
            "unfinished",
            "avg_waiting_time",
            "max_waiting_time",
        ])?;

        Ok(Self {
            stations,
            summaries,
            finished: false,
        })
    }

    /// Append one run's summary row and its per-station rows.
    pub fn write_report(&mut self, report: &RunReport) -> ReportResult<()> {
        self.summaries.write_record(&[
            report.policy.to_string(),
            report.effective_duration.to_string(),
            report.max_queue_len.to_string(),
            report.total_arrived.to_string(),
            report.total_completed.to_string(),
            report.unfinished.to_string(),
            format!("{:.4}", report.avg_waiting_time),
            report.max_waiting_time.to_string(),
        ])?;

        for s in &report.stations {
            self.stations.write_record(&[
                report.policy.to_string(),
                s.station.to_string(),
                s.served.to_string(),
                format!("{:.4}", s.avg_waiting_time),
                s.max_waiting_time.to_string(),
                format!("{:.4}", s.occupancy_pct),
                // Empty cell under the single-shared-queue policy, where
                // queue length is a run-level statistic.
                s.max_queue_len.map(|l| l.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Flush and close both files.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stations.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
