//! `shoal-behavior` — the per-tick behavioral model.
//!
//! The response functions are empirically fitted to video-tracked
//! trajectories of real fish; every coefficient, threshold, and distance band
//! in this crate is a calibration constant, not a free parameter.  Changing
//! one changes what animal the model describes.
//!
//! | Module           | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | [`perception`]   | nearest / second-nearest visible neighbor          |
//! | [`turning`]      | sinusoidal turning response, refuge bias, wander   |
//! | [`acceleration`] | speed homeostasis, neighbor bands, wall term       |
//! | [`noise`]        | `NoiseProfile` — per-draw standard deviations      |
//! | [`update`]       | one-tick update for Free fish and replicas         |

pub mod acceleration;
pub mod noise;
pub mod perception;
pub mod turning;
pub mod update;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use acceleration::{
    acceleration_for_neighbor, apply_acceleration, baseline_acceleration, wall_acceleration,
};
pub use noise::NoiseProfile;
pub use perception::select_neighbors;
pub use turning::{total_turning, turning_for_neighbor, turning_response};
pub use update::{REPLICA_CRUISE_SPEED, advance};
