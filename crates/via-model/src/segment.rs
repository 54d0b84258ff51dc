//! Road segments: ordered vehicle containers plus the red-light gating
//! policy.

use log::{error, warn};

use via_core::VehicleId;

use crate::{ModelError, ModelResult, Phase, TrafficLight, Vehicle};

/// Default maximum number of vehicles per segment.
pub const DEFAULT_CAPACITY: usize = 100;

/// A traffic light attached to a segment at a fixed position.
#[derive(Clone, Debug)]
pub struct AttachedLight {
    pub light: TrafficLight,
    /// Position of the light along the segment in metres, within
    /// `[0, segment length]`.
    pub position: f64,
}

/// A named stretch of road holding an ordered collection of vehicles and at
/// most one traffic light.
///
/// Vehicles are stored in insertion order; [`tick`](Self::tick) updates them
/// in that same order and snapshots preserve it.
#[derive(Clone, Debug)]
pub struct Segment {
    name:        String,
    length:      f64,
    speed_limit: f64,
    capacity:    usize,
    vehicles:    Vec<Vehicle>,
    light:       Option<AttachedLight>,
}

impl Segment {
    /// Create a segment with the default vehicle capacity.
    pub fn new(name: impl Into<String>, length: f64, speed_limit: f64) -> ModelResult<Self> {
        Self::with_capacity(name, length, speed_limit, DEFAULT_CAPACITY)
    }

    /// Create a segment with an explicit vehicle capacity.
    pub fn with_capacity(
        name: impl Into<String>,
        length: f64,
        speed_limit: f64,
        capacity: usize,
    ) -> ModelResult<Self> {
        let name = name.into();
        if !length.is_finite() || length <= 0.0 {
            return Err(ModelError::InvalidSegmentLength { name, length });
        }
        Ok(Self {
            name,
            length,
            speed_limit,
            // a zero capacity would make the segment unusable
            capacity: capacity.max(1),
            vehicles: Vec::new(),
            light: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in metres, always positive.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Speed limit in metres per second.
    #[inline]
    pub fn speed_limit(&self) -> f64 {
        self.speed_limit
    }

    /// Maximum number of vehicles this segment accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vehicles in insertion order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Mutable access to the vehicles, same order.
    #[inline]
    pub fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Borrow the vehicle with the given id, if present.
    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    /// Mutably borrow the vehicle with the given id, if present.
    pub fn vehicle_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| &v.id == id)
    }

    /// The attached traffic light and its position, if any.
    #[inline]
    pub fn light(&self) -> Option<&AttachedLight> {
        self.light.as_ref()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a vehicle at the end of the update order.
    ///
    /// Fails when the segment is at capacity or already holds a vehicle
    /// with the same id.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> ModelResult<()> {
        if self.vehicles.len() >= self.capacity {
            return Err(ModelError::SegmentAtCapacity {
                segment:  self.name.clone(),
                capacity: self.capacity,
            });
        }
        if self.vehicles.iter().any(|v| v.id == vehicle.id) {
            return Err(ModelError::DuplicateVehicle {
                vehicle: vehicle.id.clone(),
                segment: self.name.clone(),
            });
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Remove and return the vehicle with the given id, keeping the relative
    /// order of the remaining vehicles.
    pub fn remove_vehicle(&mut self, id: &VehicleId) -> Option<Vehicle> {
        let idx = self.vehicles.iter().position(|v| &v.id == id)?;
        Some(self.vehicles.remove(idx))
    }

    /// Attach a traffic light at `position` metres along the segment.
    ///
    /// `None` (or a non-finite position) places the light at the midpoint;
    /// out-of-range positions are clamped into `[0, length]`.  Any
    /// previously attached light is replaced.
    pub fn attach_light(&mut self, light: TrafficLight, position: Option<f64>) {
        let position = match position {
            Some(p) if p.is_finite() => p.clamp(0.0, self.length),
            _ => self.length / 2.0,
        };
        self.light = Some(AttachedLight { light, position });
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// One simulation step for this segment.
    ///
    /// Advances the attached light first; a light failure is logged and
    /// swallowed so a malfunctioning light cannot abort the vehicle updates.
    /// Then every vehicle advances in insertion order, except that a red
    /// light gates traffic: a vehicle strictly before the light that would
    /// reach or pass it this step is instead parked one metre short of it
    /// (or at the segment start if the light is closer than that) with its
    /// speed zeroed.  A vehicle update failure is logged with the vehicle
    /// and segment identity, then surfaced to the caller.
    pub fn tick(&mut self, dt: f64) -> ModelResult<()> {
        if let Some(attached) = &mut self.light {
            if let Err(e) = attached.light.advance_time(dt) {
                warn!(
                    "segment {}: traffic light failed to advance: {e}",
                    self.name
                );
            }
        }

        let blocking = self
            .light
            .as_ref()
            .filter(|a| a.light.phase() == Phase::Red)
            .map(|a| a.position);

        for vehicle in &mut self.vehicles {
            if let Some(light_pos) = blocking {
                let next = vehicle.position + vehicle.speed * dt;
                if vehicle.position < light_pos && next >= light_pos {
                    // One-shot stop at the last safe point, not a gradual
                    // deceleration.
                    vehicle.position = (light_pos - 1.0).max(0.0);
                    vehicle.speed = 0.0;
                    continue;
                }
            }
            if let Err(e) = vehicle.advance(dt, self.length) {
                error!(
                    "segment {}: failed to advance vehicle {}: {e}",
                    self.name, vehicle.id
                );
                return Err(e);
            }
        }
        Ok(())
    }
}
