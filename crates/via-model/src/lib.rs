//! `via-model` — road network model for the via_sim traffic simulator.
//!
//! # Per-segment update
//!
//! [`Segment::tick`] composes the three small state machines a step is made
//! of:
//!
//! ```text
//! tick(dt):
//!   ① advance the attached traffic light (failure logged and swallowed)
//!   ② for each vehicle in insertion order:
//!        red light ahead that would be reached this step?
//!          yes → park 1 m short of it, speed 0
//!          no  → position = min(position + speed·dt, length)
//!      (vehicle failure logged, then surfaced to the caller)
//! ```
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`vehicle`] | `Vehicle` constant-velocity kinematics        |
//! | [`light`]   | `TrafficLight` + `Phase` cyclic state machine |
//! | [`segment`] | `Segment` container + red-light gating        |
//! | [`network`] | `Network` registry keyed by segment name      |
//! | [`error`]   | `ModelError`, `ModelResult`                   |

pub mod error;
pub mod light;
pub mod network;
pub mod segment;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ModelError, ModelResult};
pub use light::{Phase, TrafficLight};
pub use network::Network;
pub use segment::{AttachedLight, DEFAULT_CAPACITY, Segment};
pub use vehicle::Vehicle;
