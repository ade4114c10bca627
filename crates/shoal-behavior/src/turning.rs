//! Turning-angle response: how much a fish rotates its heading each tick.

use shoal_agent::Fish;
use shoal_arena::Arena;
use shoal_core::FishRng;
use shoal_core::vec2::wrap_angle;

use crate::NoiseProfile;

/// Amplitude and phase of the fitted sinusoidal response.
pub const TURN_AMPLITUDE: f32 = 0.51;
pub const TURN_PHASE: f32 = 0.01;

/// Beyond this distance a neighbor exerts no influence.
pub const PERCEPTION_RANGE: f32 = 100.0;
/// Past this distance the turning contribution is halved.
pub const ATTENUATION_RANGE: f32 = 50.0;
/// Weight of the second-nearest neighbor's contribution.
pub const SECOND_NEIGHBOR_WEIGHT: f32 = 0.2;

/// Half-width of the truncation window around the sinusoid's value.
const TURN_NOISE_SPREAD: f32 = 0.4;
/// Truncation bound of the free-turn wander draw (wide enough to be
/// effectively unclipped).
const WANDER_CLIP: f32 = 10.0;

/// The fitted turning response to a stimulus at signed bearing `angle`,
/// with calibrated noise, renormalized into `(−π, π]`.
pub fn turning_response(angle: f32, noise: &NoiseProfile, rng: &mut FishRng) -> f32 {
    let response = TURN_AMPLITUDE * (angle + TURN_PHASE).sin();
    let sampled = rng.trunc_normal(
        response,
        noise.turning_sd,
        response - TURN_NOISE_SPREAD,
        response + TURN_NOISE_SPREAD,
    );
    wrap_angle(sampled)
}

/// Turning contribution from one neighbor, weighted by `coefficient`.
///
/// `None` means the neighbor did not contribute at all (absent or beyond
/// [`PERCEPTION_RANGE`]) — the caller uses that to decide whether the fish
/// falls back to a free wander.
pub fn turning_for_neighbor(
    me: &Fish,
    neighbor: Option<&Fish>,
    coefficient: f32,
    noise: &NoiseProfile,
    rng: &mut FishRng,
) -> Option<f32> {
    let other = neighbor?;
    let distance = me.position.distance(other.position);
    if distance >= PERCEPTION_RANGE {
        return None;
    }

    let bearing = me.velocity.angle_between(other.position - me.position);
    let mut turn = turning_response(bearing, noise, rng);
    if distance > ATTENUATION_RANGE {
        turn *= 0.5;
    }
    Some(turn * coefficient)
}

/// Total turning angle for one tick: nearest + weighted second-nearest
/// neighbor, plus the optional refuge bias; a lone unbiased fish wanders.
pub fn total_turning(
    me: &Fish,
    nearest: Option<&Fish>,
    second: Option<&Fish>,
    arena: &Arena,
    noise: &NoiseProfile,
    rng: &mut FishRng,
) -> f32 {
    let first = turning_for_neighbor(me, nearest, 1.0, noise, rng);
    let rest = turning_for_neighbor(me, second, SECOND_NEIGHBOR_WEIGHT, noise, rng);

    let refuge = me.refugia_force.map(|force| {
        let point = arena.refuge_point(arena.side_of(me.position));
        let bearing = me.velocity.angle_between(point - me.position);
        turning_response(bearing, noise, rng) * force
    });

    if first.is_none() && rest.is_none() && refuge.is_none() {
        // nothing to respond to: free turn
        return rng.trunc_normal(0.0, noise.wander_sd, -WANDER_CLIP, WANDER_CLIP);
    }

    first.unwrap_or(0.0) + rest.unwrap_or(0.0) + refuge.unwrap_or(0.0)
}
