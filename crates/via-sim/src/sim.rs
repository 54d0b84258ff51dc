//! The `Simulator` struct and its tick loop.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use log::warn;
use serde::Serialize;

use via_core::{SimClock, VehicleId};
use via_model::Network;

use crate::analysis::{TrafficStats, analyze};
use crate::config::NetworkConfig;
use crate::{SimError, SimObserver, SimResult};

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Positions of every vehicle at one instant of simulated time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Simulated seconds elapsed when the snapshot was taken.
    pub time: f64,
    /// Vehicle id → position (m), across every segment.
    pub positions: BTreeMap<VehicleId, f64>,
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The simulation orchestrator.
///
/// Owns the [`Network`] and the append-only snapshot history, and drives the
/// per-tick composite update (see the crate docs for the loop shape).
/// Each `Simulator` owns an independent network — there is no process-wide
/// registry.
pub struct Simulator {
    network: Network,
    clock:   SimClock,
    history: Vec<Snapshot>,
}

impl Simulator {
    /// Create a simulator over an already-populated network.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            clock: SimClock::new(),
            history: Vec::new(),
        }
    }

    /// Create a simulator from a JSON configuration file.
    pub fn from_config(path: &Path) -> SimResult<Self> {
        Ok(Self::new(NetworkConfig::from_path(path)?.build_network()?))
    }

    /// Like [`Self::from_config`] but from any `Read` source.
    pub fn from_config_reader<R: Read>(reader: R, source_id: &str) -> SimResult<Self> {
        let config = NetworkConfig::from_reader(reader, source_id)?;
        Ok(Self::new(config.build_network()?))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// Simulated seconds elapsed so far.
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs
    }

    /// The append-only per-tick snapshot history.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run `ticks` simulation steps of `dt` seconds each.
    ///
    /// Per-segment update failures and per-tick analysis failures are
    /// contained: the failure is logged, the tick's snapshot is still
    /// recorded (with [`TrafficStats::empty`] standing in for failed
    /// analysis), and the run continues — one bad tick does not abort the
    /// batch.  Calls `observer.on_run_end` once after the loop and returns
    /// the statistics of the final tick.
    pub fn run<O: SimObserver>(
        &mut self,
        ticks: i64,
        dt: f64,
        observer: &mut O,
    ) -> SimResult<TrafficStats> {
        if ticks <= 0 {
            return Err(SimError::InvalidIterationCount { ticks });
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep { dt });
        }

        let mut stats = TrafficStats::empty();
        for _ in 0..ticks {
            self.clock.advance(dt);

            for segment in self.network.segments_mut() {
                // Already logged with full detail inside Segment::tick.
                if let Err(e) = segment.tick(dt) {
                    warn!("segment {} update failed this tick: {e}", segment.name());
                }
            }

            stats = match analyze(&self.network) {
                Ok(s) => s,
                Err(e) => {
                    warn!("analysis failed at {}: {e}", self.clock);
                    TrafficStats::empty()
                }
            };

            observer.on_tick(self.clock.elapsed_secs, &self.network, &stats);

            let positions: BTreeMap<VehicleId, f64> =
                self.network.positions().into_iter().collect();
            self.history.push(Snapshot {
                time: self.clock.elapsed_secs,
                positions,
            });
        }

        observer.on_run_end(&stats);
        Ok(stats)
    }
}
