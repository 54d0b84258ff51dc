//! Aggregate traffic statistics.

use serde::Serialize;

use via_model::Network;

use crate::{SimError, SimResult};

/// Aggregate statistics for one tick of the simulation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrafficStats {
    /// Total vehicles across all segments.
    pub vehicle_count: usize,
    /// Per-vehicle speeds in network iteration order.
    pub speeds: Vec<f64>,
    /// Mean of `speeds`; 0 when there are no vehicles.
    pub mean_speed: f64,
}

impl TrafficStats {
    /// The degraded placeholder the simulator substitutes when per-tick
    /// analysis fails: zero vehicles, no speeds, zero mean.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Compute aggregate statistics over the whole network.
///
/// Errors with [`SimError::MissingData`] when there are no segments or no
/// vehicles to analyse — the simulator treats this as a recoverable per-tick
/// condition.
pub fn analyze(network: &Network) -> SimResult<TrafficStats> {
    if network.is_empty() {
        return Err(SimError::MissingData("network has no segments"));
    }

    let speeds: Vec<f64> = network
        .segments()
        .flat_map(|s| s.vehicles().iter().map(|v| v.speed))
        .collect();
    if speeds.is_empty() {
        return Err(SimError::MissingData("network has no vehicles"));
    }

    let mean_speed = speeds.iter().sum::<f64>() / speeds.len() as f64;
    Ok(TrafficStats {
        vehicle_count: speeds.len(),
        speeds,
        mean_speed,
    })
}
