//! Observer hooks invoked by the simulator's run loop.

use via_model::Network;

use crate::TrafficStats;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The simulator never relies on a return
/// value from these — display and export are pure side effects.
pub trait SimObserver {
    /// Called once per tick, after vehicles moved and statistics were
    /// computed (possibly the degraded placeholder for that tick).
    fn on_tick(&mut self, _elapsed_secs: f64, _network: &Network, _stats: &TrafficStats) {}

    /// Called once after the final tick, with the last computed statistics.
    fn on_run_end(&mut self, _stats: &TrafficStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
