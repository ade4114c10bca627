//! `shoal-core` — foundational types for the shoalsim collective-decision model.
//!
//! This crate is a dependency of every other `shoal-*` crate.  It intentionally
//! has no `shoal-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`vec2`]     | `Vec2` — immutable 2-D vector value type             |
//! | [`ids`]      | `FishId`                                             |
//! | [`rng`]      | `FishRng` (per-agent), `TrialRng`, `trunc_normal`    |
//! | [`config`]   | `Tick`, `SimConfig`                                  |
//! | [`error`]    | `ShoalError`, `ShoalResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, Tick};
pub use error::{ShoalError, ShoalResult};
pub use ids::FishId;
pub use rng::{FishRng, TrialRng, trunc_normal};
pub use vec2::Vec2;
