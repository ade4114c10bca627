//! Acceleration responses: speed homeostasis, neighbor bands, wall term.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use shoal_agent::Fish;
use shoal_arena::{Arena, Obstacle, edge_proximity_vector};
use shoal_core::{FishRng, Vec2};

use crate::NoiseProfile;
use crate::turning::PERCEPTION_RANGE;

/// Linear speed-homeostasis fit: `a = SLOPE · speed + INTERCEPT`.
pub const BASELINE_SLOPE: f32 = -0.24;
pub const BASELINE_INTERCEPT: f32 = 1.54;

/// Inside this distance a neighbor repels instead of attracting.
pub const REPULSION_RANGE: f32 = 6.0;
/// Attraction strengthens once the neighbor is farther than this.
const STRONG_ATTRACTION_RANGE: f32 = 25.0;

/// Baseline acceleration toward the preferred cruising speed.
pub fn baseline_acceleration(speed: f32, noise: &NoiseProfile, rng: &mut FishRng) -> f32 {
    let response = BASELINE_SLOPE * speed + BASELINE_INTERCEPT;
    rng.trunc_normal(response, noise.baseline_sd, -10.0, 20.0)
}

/// Signed acceleration contributed by one neighbor.
///
/// Three distance bands: closer than [`REPULSION_RANGE`] the fish backs away
/// from neighbors ahead and surges past neighbors behind; out to the
/// perception range it attracts (harder when the neighbor is far ahead);
/// beyond perception the neighbor contributes nothing.  "Ahead" means the
/// signed bearing lies in `(−π/2, π/2)`.
pub fn acceleration_for_neighbor(
    me: &Fish,
    neighbor: Option<&Fish>,
    noise: &NoiseProfile,
    rng: &mut FishRng,
) -> f32 {
    let Some(other) = neighbor else {
        return 0.0;
    };

    let distance = me.position.distance(other.position);
    if distance > PERCEPTION_RANGE {
        return 0.0;
    }

    let bearing = me.velocity.angle_between(other.position - me.position);
    let ahead = bearing > -FRAC_PI_2 && bearing < FRAC_PI_2;
    let sd = noise.neighbor_sd;

    if distance < REPULSION_RANGE {
        if ahead {
            rng.trunc_normal(-1.0, sd, -1.5, -0.5)
        } else {
            rng.trunc_normal(2.0, sd, 1.5, 2.5)
        }
    } else if ahead {
        if distance > STRONG_ATTRACTION_RANGE {
            rng.trunc_normal(2.0, sd, 1.5, 2.5)
        } else {
            rng.trunc_normal(1.5, sd, 0.5, 1.5)
        }
    } else {
        rng.trunc_normal(-1.0, sd, -1.5, -0.5)
    }
}

/// Acceleration induced by a nearby wall or obstacle edge.
///
/// Swimming roughly parallel to the edge (bearing within π/6 of ±π/2) draws
/// an escape surge; swimming away from it draws a brake; swimming head-on
/// leaves speed to the turning response.
pub fn wall_acceleration(
    me: &Fish,
    arena: &Arena,
    obstacle: &Obstacle,
    noise: &NoiseProfile,
    rng: &mut FishRng,
) -> f32 {
    let edge = edge_proximity_vector(me.position, arena, obstacle);
    if edge == Vec2::ZERO {
        return 0.0;
    }

    let bearing = me.velocity.angle_between(edge);
    if (bearing.abs() - FRAC_PI_2).abs() <= FRAC_PI_6 {
        rng.trunc_normal(2.0, noise.wall_escape_sd, 1.0, 3.0)
    } else if bearing.abs() > FRAC_PI_2 {
        rng.trunc_normal(-0.5, noise.wall_brake_sd, -1.0, 0.0)
    } else {
        0.0
    }
}

/// Apply a scalar acceleration along the fish's current heading.
///
/// A fish at rest has no heading to accelerate along and keeps its zero
/// velocity.
pub fn apply_acceleration(fish: &mut Fish, accel: f32) {
    let speed = fish.speed();
    if speed == 0.0 {
        return;
    }
    fish.velocity += fish.velocity * (accel / speed);
}
