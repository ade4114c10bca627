//! Nearest and second-nearest visible neighbor selection.

use std::f32::consts::PI;

use shoal_agent::Fish;

/// Half-width of the blind cone directly behind a fish.
pub const BLIND_CONE_HALF_WIDTH: f32 = PI / 15.0;

/// Return the indices of the nearest and second-nearest *visible* neighbors
/// of `fish[idx]`, nearest first.
///
/// A neighbor is visible when the signed angle from the fish's heading to the
/// direction-to-neighbor (normalized to `(−π, π]`) lies outside the blind
/// cone behind: `angle ∈ (−π + π/15, π − π/15)`.  No distance cap is applied
/// here — the response functions attenuate by range themselves.  Ties break
/// by iteration order; the fish never selects itself.
pub fn select_neighbors(idx: usize, fish: &[Fish]) -> (Option<usize>, Option<usize>) {
    let me = &fish[idx];

    let mut nearest: Option<(usize, f32)> = None;
    let mut second: Option<(usize, f32)> = None;

    for (j, other) in fish.iter().enumerate() {
        if j == idx {
            continue;
        }

        let to_other = other.position - me.position;
        let angle = me.velocity.angle_between(to_other);
        let visible = angle > -PI + BLIND_CONE_HALF_WIDTH && angle < PI - BLIND_CONE_HALF_WIDTH;
        if !visible {
            continue;
        }

        let distance = me.position.distance(other.position);
        match nearest {
            Some((_, best)) if distance >= best => {
                if second.is_none_or(|(_, d)| distance < d) {
                    second = Some((j, distance));
                }
            }
            _ => {
                second = nearest;
                nearest = Some((j, distance));
            }
        }
    }

    (nearest.map(|(j, _)| j), second.map(|(j, _)| j))
}
