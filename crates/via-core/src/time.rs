//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: the clock accumulates the sum of every `dt` passed to
//! [`SimClock::advance`].  A tick counter rides along for log lines, but all
//! recorded times come from the accumulated seconds — the step duration may
//! vary between runs and the clock stays agnostic.

use std::fmt;

/// Continuous simulation clock.
///
/// Cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds elapsed since the start of the run.
    pub elapsed_secs: f64,
    /// Number of steps taken so far.
    pub ticks: u64,
}

impl SimClock {
    /// Create a clock at t = 0 with no steps taken.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one step of `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.elapsed_secs += dt;
        self.ticks += 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}s (tick {})", self.elapsed_secs, self.ticks)
    }
}
