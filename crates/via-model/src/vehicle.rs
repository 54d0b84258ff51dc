//! Vehicle kinematics.

use via_core::VehicleId;

use crate::{ModelError, ModelResult};

/// A single vehicle on a road segment.
///
/// The vehicle holds no reference to its segment; kinematic operations take
/// the segment length explicitly, which keeps ownership a strict tree
/// (network → segment → vehicle).  Fields are `pub` so tests and tools can
/// poke state directly; the constructor validates the normal path.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    /// Identifier, unique within the owning segment.
    pub id: VehicleId,
    /// Position along the segment in metres, within `[0, segment length]`.
    pub position: f64,
    /// Current speed in metres per second, never negative.
    pub speed: f64,
}

impl Vehicle {
    /// Create a vehicle, validating speed and position against the segment
    /// it is about to enter.
    pub fn new(
        id: impl Into<VehicleId>,
        position: f64,
        speed: f64,
        segment_length: f64,
    ) -> ModelResult<Self> {
        let id = id.into();
        if !speed.is_finite() || speed < 0.0 {
            return Err(ModelError::NegativeSpeed { vehicle: id, speed });
        }
        if !position.is_finite() || position < 0.0 || position > segment_length {
            return Err(ModelError::PositionOutOfRange {
                vehicle:  id,
                position,
                max:      segment_length,
            });
        }
        Ok(Self { id, position, speed })
    }

    /// Advance the vehicle by `dt` seconds of constant-velocity motion,
    /// clamping at the end of the segment — vehicles never fall off.
    ///
    /// Errors with the invalid-position kind if the speed was mutated into
    /// an invalid state since construction; the position is left untouched
    /// in that case.
    pub fn advance(&mut self, dt: f64, segment_length: f64) -> ModelResult<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ModelError::PositionOutOfRange {
                vehicle:  self.id.clone(),
                position: self.position,
                max:      segment_length,
            });
        }
        self.position = (self.position + self.speed * dt).min(segment_length);
        Ok(())
    }

    /// Mutate the speed, rejecting negative or non-finite values.
    pub fn set_speed(&mut self, speed: f64) -> ModelResult<()> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ModelError::NegativeSpeed {
                vehicle: self.id.clone(),
                speed,
            });
        }
        self.speed = speed;
        Ok(())
    }

    /// Reset the vehicle to the start of a segment it is re-entering.
    ///
    /// Position restarts at 0; speed is kept.  Called by
    /// `Network::transfer_vehicle`.
    pub(crate) fn enter_segment(&mut self) {
        self.position = 0.0;
    }
}
