//! Simulator-level error type.
//!
//! `SimError` is the broadest error in the workspace: model errors convert
//! into it via `From`, so callers can catch everything at the run boundary
//! or destructure `SimError::Model` for the narrow kinds.

use thiserror::Error;

use via_model::ModelError;

/// Errors produced by `via-sim`.
#[derive(Debug, Error)]
pub enum SimError {
    /// `run` called with a non-positive number of ticks.
    #[error("invalid iteration count {ticks}: must be positive")]
    InvalidIterationCount { ticks: i64 },

    /// `run` called with a non-positive or non-finite time step.
    #[error("invalid time step dt={dt}: must be a positive number of seconds")]
    InvalidTimeStep { dt: f64 },

    /// Configuration source missing, unreadable, or malformed.
    #[error("configuration error in {source_id}: {reason}")]
    Config { source_id: String, reason: String },

    /// Analysis requested on a network with nothing to analyse.
    #[error("missing data: {0}")]
    MissingData(&'static str),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Shorthand result type for `via-sim`.
pub type SimResult<T> = Result<T, SimError>;
