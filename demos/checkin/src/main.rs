//! checkin — compare dispatch policies for a bank of service stations.
//!
//! Loads a JSON configuration, runs one simulation per configured policy
//! (in parallel — runs share nothing and each derives its own RNG seed),
//! prints a report table per run, and optionally exports CSV.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use qs_core::{PolicyKind, SimulationConfig, Tick};
use qs_model::{SharedQueue, Station};
use qs_report::{CsvWriter, RunReport};
use qs_sim::{SimObserver, Simulation};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "checkin", about = "Discrete-time queue simulation comparing dispatch policies")]
struct Args {
    /// Path to the JSON simulation configuration.
    #[arg(short, long, default_value = "simulation_config.json")]
    config: PathBuf,

    /// Directory for CSV export (no export when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Emits a queue-state snapshot every `log_interval_ticks` ticks as a
/// `tracing` debug event (enable with `RUST_LOG=debug`).
struct QueueLogObserver {
    policy: PolicyKind,
}

impl SimObserver for QueueLogObserver {
    fn on_snapshot(&mut self, tick: Tick, stations: &[Station], shared: &SharedQueue) {
        let waiting: usize =
            shared.len() + stations.iter().map(Station::queue_len).sum::<usize>();
        let busy = stations.iter().filter(|s| s.is_busy()).count();
        debug!(policy = %self.policy, %tick, waiting, busy, "queue snapshot");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 1. Load and validate configuration.  Any failure here — missing file,
    //    malformed JSON, unknown policy name — aborts before any run starts.
    let config = SimulationConfig::from_path(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    let policies = config.policy_kinds()?;
    info!(
        path = %args.config.display(),
        policies = policies.len(),
        "configuration loaded"
    );

    println!("=== checkin — dispatch policy comparison ===");
    println!(
        "Stations: {}  |  Horizon: {} ticks  |  Arrival p: {}  |  Seed: {}",
        config.num_stations, config.duration, config.arrival_probability, config.seed
    );
    println!();

    // 2. Run every configured policy.  Runs are embarrassingly parallel:
    //    each owns fresh state and an RNG derived from the master seed and
    //    its list position, so parallel results match a serial run.
    let t0 = Instant::now();
    let reports: Vec<RunReport> = policies
        .par_iter()
        .enumerate()
        .map(|(i, &policy)| -> Result<RunReport> {
            let mut sim = Simulation::from_config(&config, policy, i as u64)?;
            sim.run(&mut QueueLogObserver { policy });
            Ok(RunReport::from_run(&sim))
        })
        .collect::<Result<_>>()?;
    let elapsed = t0.elapsed();

    // 3. Print reports in configured order.
    for report in &reports {
        println!("{report}");
    }
    println!("All {} runs complete in {:.3} s", reports.len(), elapsed.as_secs_f64());

    // 4. Optional CSV export.
    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let mut writer = CsvWriter::new(dir)?;
        for report in &reports {
            writer.write_report(report)?;
        }
        writer.finish()?;
        println!("CSV written to {}", dir.display());
    }

    Ok(())
}
