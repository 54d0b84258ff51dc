//! `via-sim` — tick loop orchestrator for the via_sim traffic simulator.
//!
//! # Tick loop
//!
//! ```text
//! for each of `ticks` steps:
//!   ① clock    — elapsed time += dt
//!   ② segments — Segment::tick(dt) on every segment (exhaustive; a
//!                failing segment is logged, the run continues)
//!   ③ analysis — aggregate TrafficStats over the network
//!                (degraded to TrafficStats::empty() on failure)
//!   ④ observe  — observer.on_tick(elapsed, network, stats)
//!   ⑤ record   — append a {time, vehicle id → position} snapshot
//! observer.on_run_end(last stats)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use via_sim::{NoopObserver, Simulator};
//!
//! let mut sim = Simulator::from_config(Path::new("config.json"))?;
//! let stats = sim.run(10, 10.0, &mut NoopObserver)?;
//! println!("{} vehicles, mean {:.1} m/s", stats.vehicle_count, stats.mean_speed);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use analysis::{TrafficStats, analyze};
pub use config::{LightSpec, NetworkConfig, SegmentSpec, VehicleSpec};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Simulator, Snapshot};
