//! Model-layer error type.
//!
//! One variant per domain invariant, each carrying the offending value and
//! the entity it belongs to as structured fields rather than strings.
//! `via-sim` wraps this enum as `SimError::Model`, so callers can match
//! broadly at the simulator boundary or narrowly here.

use thiserror::Error;

use via_core::VehicleId;

/// Errors produced by `via-model`.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Vehicle constructed or mutated with a negative (or non-finite) speed.
    #[error("invalid speed {speed} m/s for vehicle {vehicle}")]
    NegativeSpeed { vehicle: VehicleId, speed: f64 },

    /// Vehicle position outside `[0, segment length]`, or a kinematic update
    /// that hit an invalid state — surfaced as one kind for caller
    /// simplicity.
    #[error("invalid position {position} m for vehicle {vehicle} (max {max} m)")]
    PositionOutOfRange {
        vehicle:  VehicleId,
        position: f64,
        max:      f64,
    },

    /// Segment constructed with a non-positive or non-finite length.
    #[error("invalid length {length} m for segment {name}")]
    InvalidSegmentLength { name: String, length: f64 },

    /// Traffic light constructed with a non-positive or non-finite phase
    /// duration.
    #[error("invalid traffic light cycle of {cycle} s")]
    InvalidLightCycle { cycle: f64 },

    /// A NaN or infinite time step reached a phase timer.
    #[error("non-finite time step {dt}")]
    NonFiniteTimeStep { dt: f64 },

    /// `add_vehicle` would exceed the segment's capacity.
    #[error("segment {segment} is at capacity ({capacity} vehicles)")]
    SegmentAtCapacity { segment: String, capacity: usize },

    /// `add_vehicle` with an id already present on that segment.
    #[error("vehicle {vehicle} is already on segment {segment}")]
    DuplicateVehicle { vehicle: VehicleId, segment: String },

    /// The named vehicle is not on the segment it was looked up on.
    #[error("vehicle {vehicle} is not on segment {segment}")]
    VehicleNotFound { vehicle: VehicleId, segment: String },

    /// Network lookup miss.  Carries the names currently registered so the
    /// caller can report what *was* available.
    #[error("segment {name} not found (known segments: {})", .known.join(", "))]
    SegmentNotFound { name: String, known: Vec<String> },
}

/// Shorthand result type for `via-model`.
pub type ModelResult<T> = Result<T, ModelError>;
