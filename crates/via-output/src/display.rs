//! Console display observer.

use log::info;

use via_model::Network;
use via_sim::{SimObserver, TrafficStats};

/// A [`SimObserver`] that logs the network state after every tick: one
/// summary line, then one line per segment with positions rounded to
/// centimetres.
#[derive(Default)]
pub struct ConsoleDisplay;

impl SimObserver for ConsoleDisplay {
    fn on_tick(&mut self, elapsed_secs: f64, network: &Network, stats: &TrafficStats) {
        info!(
            "t={elapsed_secs:.2}s: {} vehicles, mean speed {:.2} m/s",
            stats.vehicle_count, stats.mean_speed
        );
        for segment in network.segments() {
            let positions: Vec<String> = segment
                .vehicles()
                .iter()
                .map(|v| format!("{}@{:.2}m", v.id, v.position))
                .collect();
            info!("  {}: [{}]", segment.name(), positions.join(", "));
        }
    }

    fn on_run_end(&mut self, stats: &TrafficStats) {
        info!(
            "run finished: {} vehicles, mean speed {:.2} m/s",
            stats.vehicle_count, stats.mean_speed
        );
    }
}
