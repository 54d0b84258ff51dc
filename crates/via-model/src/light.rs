//! Cyclic three-phase traffic light.

use std::fmt;

use crate::{ModelError, ModelResult};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// One of the three light phases, cycling red → green → yellow → red → …
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    Red,
    Green,
    Yellow,
}

impl Phase {
    /// The phase following `self` in the cycle.
    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Yellow,
            Phase::Yellow => Phase::Red,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Red => "red",
            Phase::Green => "green",
            Phase::Yellow => "yellow",
        })
    }
}

// ── TrafficLight ──────────────────────────────────────────────────────────────

/// A traffic light cycling through the three phases, each lasting
/// `cycle_secs` seconds.  Starts red with no time elapsed in the phase.
#[derive(Clone, Debug)]
pub struct TrafficLight {
    cycle_secs:       f64,
    phase:            Phase,
    elapsed_in_phase: f64,
}

impl TrafficLight {
    /// Create a light whose phases each last `cycle_secs` seconds.
    ///
    /// The duration must be finite and positive — the rollover loop in
    /// [`advance_time`](Self::advance_time) relies on it.
    pub fn new(cycle_secs: f64) -> ModelResult<Self> {
        if !cycle_secs.is_finite() || cycle_secs <= 0.0 {
            return Err(ModelError::InvalidLightCycle { cycle: cycle_secs });
        }
        Ok(Self {
            cycle_secs,
            phase: Phase::Red,
            elapsed_in_phase: 0.0,
        })
    }

    /// The current phase.  Pure read.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Duration of one phase in seconds.
    #[inline]
    pub fn cycle_secs(&self) -> f64 {
        self.cycle_secs
    }

    /// Seconds spent in the current phase, always in `[0, cycle_secs)`.
    #[inline]
    pub fn elapsed_in_phase(&self) -> f64 {
        self.elapsed_in_phase
    }

    /// Advance the light's timer by `dt` seconds.
    ///
    /// `dt <= 0` is ignored.  A `dt` spanning several full phases rolls the
    /// phase forward once per elapsed cycle, so `advance_time(3.0 * cycle)`
    /// advances exactly three phases.
    pub fn advance_time(&mut self, dt: f64) -> ModelResult<()> {
        if dt.is_nan() || dt.is_infinite() {
            return Err(ModelError::NonFiniteTimeStep { dt });
        }
        if dt <= 0.0 {
            return Ok(());
        }
        self.elapsed_in_phase += dt;
        while self.elapsed_in_phase >= self.cycle_secs {
            self.elapsed_in_phase -= self.cycle_secs;
            self.phase = self.phase.next();
        }
        Ok(())
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}s/{:.2}s)",
            self.phase, self.elapsed_in_phase, self.cycle_secs
        )
    }
}
