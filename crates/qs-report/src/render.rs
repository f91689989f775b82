//! Fixed-width text rendering for run reports.

use std::fmt;

use crate::RunReport;

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "policy: {}", self.policy)?;
        writeln!(f, "effective duration: {} ticks", self.effective_duration)?;
        writeln!(
            f,
            "passengers: {} arrived, {} completed, {} unfinished",
            self.total_arrived, self.total_completed, self.unfinished
        )?;
        writeln!(
            f,
            "overall waiting time: avg {:.2}, max {}",
            self.avg_waiting_time, self.max_waiting_time
        )?;
        if self.policy.uses_shared_queue() {
            writeln!(f, "max shared queue length: {}", self.max_queue_len)?;
        } else {
            writeln!(f, "max queue length: {}", self.max_queue_len)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<10} {:>8} {:>10} {:>10} {:>11} {:>10}",
            "station", "served", "avg wait", "max wait", "occupancy", "max queue"
        )?;
        writeln!(f, "{}", "-".repeat(64))?;
        for s in &self.stations {
            let max_queue = match s.max_queue_len {
                Some(len) => len.to_string(),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<10} {:>8} {:>10.2} {:>10} {:>10.2}% {:>10}",
                s.station, s.served, s.avg_waiting_time, s.max_waiting_time, s.occupancy_pct,
                max_queue
            )?;
        }
        Ok(())
    }
}
