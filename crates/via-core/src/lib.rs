//! `via-core` — foundational types for the via_sim traffic simulator.
//!
//! This crate is a dependency of every other `via-*` crate.  It intentionally
//! has no `via-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`ids`]  | `VehicleId`                                       |
//! | [`time`] | `SimClock` (continuous elapsed-time accumulator)  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::VehicleId;
pub use time::SimClock;
