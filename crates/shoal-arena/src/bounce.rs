//! Boundary and obstacle resolution.
//!
//! Free functions over a `(position, velocity)` pair so the agent crate can
//! call them after integrating a tick without this crate knowing about fish.
//! Each resolver mutates the pair in place and reports whether it fired.

use std::f32::consts::FRAC_PI_2;

use shoal_core::{FishRng, Vec2};

use crate::{Arena, Obstacle};

/// How far from a wall or obstacle edge a fish senses it.
pub const SENSE_DISTANCE: f32 = 15.0;
/// Within this distance of an adjacent edge the perpendicular deflection
/// component is reversed to avoid corner-trapping.
const CORNER_MARGIN: f32 = 10.0;

/// Mean / sd / bounds of the random inward bounce factor.
const BOUNCE_MEAN: f32 = 0.1;
const BOUNCE_SD: f32 = 0.05;
const BOUNCE_LOW: f32 = 0.05;
const BOUNCE_UPP: f32 = 0.15;

// ── Arena walls ───────────────────────────────────────────────────────────────

/// Clamp an out-of-bounds position back to the arena and deflect velocity.
///
/// The bounce vector has a random truncated-normal inward component along the
/// crossed axis and a unit perpendicular component whose sign follows the
/// signed angle between the inward wall normal and the current velocity
/// (deflect to the side the fish was already drifting toward).  Near a corner
/// the perpendicular component is reversed.  Velocity is rotated by the angle
/// from its heading to the bounce vector, so speed is preserved.
///
/// Returns `false` (and leaves the pair untouched) when in bounds.
pub fn resolve_walls(pos: &mut Vec2, vel: &mut Vec2, arena: &Arena, rng: &mut FishRng) -> bool {
    let crossed_x = pos.x < 0.0 || pos.x > arena.width;
    let crossed_y = pos.y < 0.0 || pos.y > arena.height;
    if !crossed_x && !crossed_y {
        return false;
    }

    // x-axis crossings take priority; a corner crossing clamps both
    // coordinates but bounces off the vertical wall.
    let normal = if crossed_x {
        if pos.x < 0.0 { Vec2::new(1.0, 0.0) } else { Vec2::new(-1.0, 0.0) }
    } else if pos.y < 0.0 {
        Vec2::new(0.0, 1.0)
    } else {
        Vec2::new(0.0, -1.0)
    };

    pos.x = pos.x.clamp(0.0, arena.width);
    pos.y = pos.y.clamp(0.0, arena.height);

    let near_corner = if crossed_x {
        pos.y < CORNER_MARGIN || pos.y > arena.height - CORNER_MARGIN
    } else {
        pos.x < CORNER_MARGIN || pos.x > arena.width - CORNER_MARGIN
    };

    // Sign of the tangential deflection: follow the fish's existing drift,
    // reversed near corners so it turns back into open water.
    let drift = normal.angle_between(*vel);
    let mut perp_sign = if drift >= 0.0 { 1.0 } else { -1.0 };
    if near_corner {
        perp_sign = -perp_sign;
    }

    let inward = rng.trunc_normal(BOUNCE_MEAN, BOUNCE_SD, BOUNCE_LOW, BOUNCE_UPP);
    let tangent = normal.rotate(FRAC_PI_2);
    let bounce = normal.scale(inward) + tangent.scale(perp_sign);

    *vel = vel.rotate(vel.angle_between(bounce));
    true
}

// ── Obstacle intrusion ────────────────────────────────────────────────────────

/// Expel a fish that has intruded into the obstacle triangle.
///
/// Chooses the nearer slanted edge, deflects velocity away from it (edge
/// direction rotated by ±(π/2 + bounce factor), sign matching the signed
/// angle from heading to edge so the turn leads back out of the triangle),
/// and snaps `pos.y` onto the edge at the current x.
///
/// Returns `false` when the fish is not inside the triangle.
pub fn resolve_obstacle(
    pos: &mut Vec2,
    vel: &mut Vec2,
    obstacle: &Obstacle,
    rng: &mut FishRng,
) -> bool {
    if !obstacle.contains(*pos) {
        return false;
    }

    let to_top = pos.y - obstacle.top_edge_y(pos.x);
    let to_bottom = obstacle.bottom_edge_y(pos.x) - pos.y;
    let (edge_dir, snap_y) = if to_top < to_bottom {
        (obstacle.top_edge_dir(), obstacle.top_edge_y(pos.x))
    } else {
        (obstacle.bottom_edge_dir(), obstacle.bottom_edge_y(pos.x))
    };

    let heading_to_edge = vel.angle_between(edge_dir);
    let sign = if heading_to_edge >= 0.0 { 1.0 } else { -1.0 };
    let bounce = rng.trunc_normal(BOUNCE_MEAN, BOUNCE_SD, BOUNCE_LOW, BOUNCE_UPP);
    let deflect = edge_dir.rotate(sign * (FRAC_PI_2 + bounce));

    *vel = vel.rotate(vel.angle_between(deflect));
    pos.y = snap_y;
    true
}

// ── Edge proximity ────────────────────────────────────────────────────────────

/// Direction away from the nearest wall or obstacle edge within
/// [`SENSE_DISTANCE`], or `Vec2::ZERO` when nothing is in range.
///
/// Wall checks run x-axis first (left, right), then y-axis (top, bottom);
/// the first match wins.  Obstacle-edge proximity overrides any wall match
/// with a fixed avoidance heading.
pub fn edge_proximity_vector(pos: Vec2, arena: &Arena, obstacle: &Obstacle) -> Vec2 {
    let wall = if pos.x < SENSE_DISTANCE {
        Vec2::new(1.0, 0.0)
    } else if pos.x > arena.width - SENSE_DISTANCE {
        Vec2::new(-1.0, 0.0)
    } else if pos.y < SENSE_DISTANCE {
        Vec2::new(0.0, 1.0)
    } else if pos.y > arena.height - SENSE_DISTANCE {
        Vec2::new(0.0, -1.0)
    } else {
        Vec2::ZERO
    };

    // "Not applicable" distances count as out of range.
    if obstacle.distance_to_top_edge(pos).is_some_and(|d| d < SENSE_DISTANCE) {
        Obstacle::TOP_AVOIDANCE
    } else if obstacle.distance_to_bottom_edge(pos).is_some_and(|d| d < SENSE_DISTANCE) {
        Obstacle::BOTTOM_AVOIDANCE
    } else {
        wall
    }
}
