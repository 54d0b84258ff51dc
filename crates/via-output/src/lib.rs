//! `via-output` — display and export collaborators for the via_sim traffic
//! simulator.
//!
//! The simulation core never writes anywhere itself; everything here plugs
//! into the run through [`via_sim::SimObserver`] or consumes the snapshot
//! history after the run.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`display`]   | `ConsoleDisplay` — per-tick log lines              |
//! | [`stats`]     | `write_stats_json` — final statistics to JSON      |
//! | [`positions`] | `write_positions_csv` — position time-series to CSV|
//! | [`observer`]  | `StatsExportObserver` — export on run end          |
//! | [`error`]     | `OutputError`, `OutputResult`                      |

pub mod display;
pub mod error;
pub mod observer;
pub mod positions;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use display::ConsoleDisplay;
pub use error::{OutputError, OutputResult};
pub use observer::StatsExportObserver;
pub use positions::write_positions_csv;
pub use stats::write_stats_json;
