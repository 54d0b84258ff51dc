//! JSON network configuration loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "segments": [
//!     { "name": "A1", "length": 1000.0, "speed_limit": 50.0,
//!       "capacity": 100,
//!       "light": { "cycle": 30.0, "position": 500.0 } }
//!   ],
//!   "vehicles": [
//!     { "id": "V1", "segment": "A1", "position": 0.0, "speed": 10.0 }
//!   ]
//! }
//! ```
//!
//! `capacity` defaults to [`via_model::DEFAULT_CAPACITY`]; `light` is
//! optional and, when its `position` is omitted, lands at the segment
//! midpoint.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use via_model::{Network, Segment, TrafficLight, Vehicle};

use crate::{SimError, SimResult};

// ── Config records ────────────────────────────────────────────────────────────

/// One segment entry in the configuration file.
#[derive(Clone, Debug, Deserialize)]
pub struct SegmentSpec {
    pub name:        String,
    pub length:      f64,
    pub speed_limit: f64,
    #[serde(default)]
    pub capacity:    Option<usize>,
    #[serde(default)]
    pub light:       Option<LightSpec>,
}

/// Optional traffic light attached to a segment.
#[derive(Clone, Debug, Deserialize)]
pub struct LightSpec {
    /// Duration of each phase in seconds.
    pub cycle: f64,
    /// Position along the segment; segment midpoint when omitted.
    #[serde(default)]
    pub position: Option<f64>,
}

/// One vehicle entry in the configuration file.
#[derive(Clone, Debug, Deserialize)]
pub struct VehicleSpec {
    pub id:       String,
    /// Name of the segment the vehicle starts on.
    pub segment:  String,
    pub position: f64,
    pub speed:    f64,
}

/// Top-level configuration: the segments and vehicles to instantiate.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkConfig {
    pub segments: Vec<SegmentSpec>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl NetworkConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let source_id = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| SimError::Config {
            source_id: source_id.clone(),
            reason:    e.to_string(),
        })?;
        Self::from_reader(file, &source_id)
    }

    /// Like [`Self::from_path`] but reads from any `Read` source.
    ///
    /// Useful for tests (pass a `std::io::Cursor`) or embedded
    /// configurations; `source_id` names the source in error messages.
    pub fn from_reader<R: Read>(reader: R, source_id: &str) -> SimResult<Self> {
        serde_json::from_reader(reader).map_err(|e| SimError::Config {
            source_id: source_id.to_owned(),
            reason:    e.to_string(),
        })
    }

    /// Build and populate a [`Network`].
    ///
    /// Model validation failures (bad lengths, speeds, positions) propagate
    /// unchanged — configuration authoring errors are never recovered here.
    pub fn build_network(&self) -> SimResult<Network> {
        let mut network = Network::new();

        for spec in &self.segments {
            let mut segment = match spec.capacity {
                Some(cap) => {
                    Segment::with_capacity(spec.name.as_str(), spec.length, spec.speed_limit, cap)?
                }
                None => Segment::new(spec.name.as_str(), spec.length, spec.speed_limit)?,
            };
            if let Some(light) = &spec.light {
                segment.attach_light(TrafficLight::new(light.cycle)?, light.position);
            }
            network.add_segment(segment);
        }

        for spec in &self.vehicles {
            let length = network.segment(&spec.segment)?.length();
            let vehicle = Vehicle::new(spec.id.as_str(), spec.position, spec.speed, length)?;
            network.segment_mut(&spec.segment)?.add_vehicle(vehicle)?;
        }

        Ok(network)
    }
}
