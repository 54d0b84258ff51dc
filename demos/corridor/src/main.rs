//! corridor — demo run of the via_sim traffic simulator.
//!
//! Simulates a short two-segment corridor: a highway feeding a signalled
//! avenue.  Pass `--config` to simulate your own network instead, and watch
//! the red-light gating in the per-tick log lines.
//!
//! Outputs land in `--out-dir` (default `data/`): `results.json` with the
//! final statistics and `positions.csv` with the position time-series.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use via_model::Network;
use via_output::{ConsoleDisplay, StatsExportObserver, write_positions_csv};
use via_sim::{SimObserver, Simulator, TrafficStats};

// ── Built-in network ──────────────────────────────────────────────────────────

// Two segments; the avenue carries a light at 200 m with a 30 s phase, so a
// 10-tick run at dt=10 shows V3 stop and start again.
const DEFAULT_CONFIG: &str = r#"{
  "segments": [
    { "name": "Highway-1", "length": 1000.0, "speed_limit": 50.0 },
    { "name": "Avenue-2", "length": 400.0, "speed_limit": 14.0,
      "light": { "cycle": 30.0, "position": 200.0 } }
  ],
  "vehicles": [
    { "id": "V1", "segment": "Highway-1", "position": 0.0, "speed": 10.0 },
    { "id": "V2", "segment": "Highway-1", "position": 120.0, "speed": 13.5 },
    { "id": "V3", "segment": "Avenue-2", "position": 150.0, "speed": 8.0 }
  ]
}"#;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Discrete-time traffic-flow simulation demo")]
struct Args {
    /// Path to a JSON network configuration (defaults to a built-in corridor).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulation steps to run.
    #[arg(long, default_value_t = 10)]
    ticks: i64,

    /// Duration of one step in seconds.
    #[arg(long, default_value_t = 10.0)]
    dt: f64,

    /// Directory for the exported stats and positions files.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Fans the run callbacks out to the console display and the stats export.
struct DemoObserver {
    display: ConsoleDisplay,
    export:  StatsExportObserver,
}

impl SimObserver for DemoObserver {
    fn on_tick(&mut self, elapsed_secs: f64, network: &Network, stats: &TrafficStats) {
        self.display.on_tick(elapsed_secs, network, stats);
    }

    fn on_run_end(&mut self, stats: &TrafficStats) {
        self.display.on_run_end(stats);
        self.export.on_run_end(stats);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut sim = match &args.config {
        Some(path) => Simulator::from_config(path)?,
        None => Simulator::from_config_reader(Cursor::new(DEFAULT_CONFIG), "built-in corridor")?,
    };

    std::fs::create_dir_all(&args.out_dir)?;
    let mut observer = DemoObserver {
        display: ConsoleDisplay,
        export:  StatsExportObserver::new(args.out_dir.join("results.json")),
    };

    sim.run(args.ticks, args.dt, &mut observer)?;
    if let Some(e) = observer.export.take_error() {
        return Err(e.into());
    }

    let positions_path = args.out_dir.join("positions.csv");
    write_positions_csv(sim.history(), &positions_path)?;
    info!("positions exported to {}", positions_path.display());

    Ok(())
}
