//! Named-segment registry.

use std::collections::BTreeMap;

use via_core::VehicleId;

use crate::{ModelError, ModelResult, Segment};

/// Registry of segments keyed by name.
///
/// A `BTreeMap` keeps iteration deterministic (name order), which makes log
/// lines and snapshots stable across runs.  Adding a segment under an
/// existing name overwrites the previous one — last write wins, no error.
#[derive(Clone, Debug, Default)]
pub struct Network {
    segments: BTreeMap<String, Segment>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a segment, replacing any existing segment with the same name.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.insert(segment.name().to_owned(), segment);
    }

    /// Look up a segment by name.
    ///
    /// The error carries the requested name together with the names
    /// currently registered, for diagnostics.
    pub fn segment(&self, name: &str) -> ModelResult<&Segment> {
        self.segments.get(name).ok_or_else(|| self.not_found(name))
    }

    /// Mutable counterpart of [`segment`](Self::segment).
    pub fn segment_mut(&mut self, name: &str) -> ModelResult<&mut Segment> {
        // Diagnostics snapshot taken up front; segment counts are small.
        let known: Vec<String> = self.segments.keys().cloned().collect();
        self.segments
            .get_mut(name)
            .ok_or_else(move || ModelError::SegmentNotFound {
                name: name.to_owned(),
                known,
            })
    }

    /// Iterate over all segments in name order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Mutable iteration over all segments in name order.
    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.segments.values_mut()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total vehicles across all segments.
    pub fn vehicle_count(&self) -> usize {
        self.segments.values().map(|s| s.vehicles().len()).sum()
    }

    /// All `(vehicle id, position)` pairs across the network, in segment
    /// name order then per-segment insertion order.
    pub fn positions(&self) -> Vec<(VehicleId, f64)> {
        self.segments
            .values()
            .flat_map(|s| s.vehicles().iter().map(|v| (v.id.clone(), v.position)))
            .collect()
    }

    /// Move a vehicle from one segment to another.
    ///
    /// The vehicle re-enters the destination at position 0 with its speed
    /// kept.  The destination's capacity and duplicate checks run before the
    /// vehicle leaves its source, so a failed transfer leaves the network
    /// unchanged.
    pub fn transfer_vehicle(&mut self, from: &str, to: &str, id: &VehicleId) -> ModelResult<()> {
        {
            let dest = self.segment(to)?;
            if dest.vehicles().len() >= dest.capacity() {
                return Err(ModelError::SegmentAtCapacity {
                    segment:  to.to_owned(),
                    capacity: dest.capacity(),
                });
            }
            if dest.vehicle(id).is_some() {
                return Err(ModelError::DuplicateVehicle {
                    vehicle: id.clone(),
                    segment: to.to_owned(),
                });
            }
        }

        let source = self.segment_mut(from)?;
        let Some(mut vehicle) = source.remove_vehicle(id) else {
            return Err(ModelError::VehicleNotFound {
                vehicle: id.clone(),
                segment: from.to_owned(),
            });
        };
        vehicle.enter_segment();
        self.segment_mut(to)?.add_vehicle(vehicle)
    }

    fn not_found(&self, name: &str) -> ModelError {
        ModelError::SegmentNotFound {
            name:  name.to_owned(),
            known: self.segments.keys().cloned().collect(),
        }
    }
}
