//! The triangular obstacle that bifurcates the swim path.
//!
//! The triangle has vertices (0, 160), (0, 640), and apex (700, 400); its two
//! slanted edges are the linear boundaries
//!
//!   top_edge_y(x)    =  (12/35)·x + 160
//!   bottom_edge_y(x) = −(12/35)·x + 640
//!
//! A point is inside when it lies strictly between the two edge lines — for
//! x past the apex the lines cross and the condition is vacuously false, so
//! no explicit x bound is needed.

use shoal_core::Vec2;

/// Slope magnitude of both slanted edges.
const EDGE_SLOPE: f32 = 12.0 / 35.0;
/// y-intercept of the top edge line.
const TOP_INTERCEPT: f32 = 160.0;
/// y-intercept of the bottom edge line.
const BOTTOM_INTERCEPT: f32 = 640.0;

/// The bifurcating triangular obstacle.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle;

impl Obstacle {
    /// Fixed avoidance heading used when a fish senses the top edge.
    pub const TOP_AVOIDANCE: Vec2 = Vec2 { x: 0.35, y: -0.94 };
    /// Fixed avoidance heading used when a fish senses the bottom edge.
    pub const BOTTOM_AVOIDANCE: Vec2 = Vec2 { x: 0.35, y: 0.94 };

    /// y of the top edge line at `x`.
    #[inline]
    pub fn top_edge_y(&self, x: f32) -> f32 {
        EDGE_SLOPE * x + TOP_INTERCEPT
    }

    /// y of the bottom edge line at `x`.
    #[inline]
    pub fn bottom_edge_y(&self, x: f32) -> f32 {
        -EDGE_SLOPE * x + BOTTOM_INTERCEPT
    }

    /// `true` if `p` lies strictly inside the triangle.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.top_edge_y(p.x) < p.y && p.y < self.bottom_edge_y(p.x)
    }

    /// Unit direction of the top edge, pointing toward the apex.
    pub fn top_edge_dir(&self) -> Vec2 {
        // (35, 12) normalized; the magnitude is exact so no Option needed
        Vec2::new(35.0, 12.0).scale(1.0 / (35.0f32.hypot(12.0)))
    }

    /// Unit direction of the bottom edge, pointing toward the apex.
    pub fn bottom_edge_dir(&self) -> Vec2 {
        Vec2::new(35.0, -12.0).scale(1.0 / (35.0f32.hypot(12.0)))
    }

    /// Perpendicular distance from `p` to the top edge's infinite line.
    ///
    /// Returns `None` when the computation is not applicable (non-finite
    /// input); callers treat that as "not close to this edge".
    pub fn distance_to_top_edge(&self, p: Vec2) -> Option<f32> {
        point_to_line_distance(p, EDGE_SLOPE, TOP_INTERCEPT)
    }

    /// Perpendicular distance from `p` to the bottom edge's infinite line.
    pub fn distance_to_bottom_edge(&self, p: Vec2) -> Option<f32> {
        point_to_line_distance(p, -EDGE_SLOPE, BOTTOM_INTERCEPT)
    }
}

/// Distance from `p` to the line `y = m·x + c`, branch-safe.
///
/// `|m·x − y + c| / √(m² + 1)` — the radicand is ≥ 1 by construction, so the
/// only invalid inputs are non-finite coordinates, mapped to `None`.
fn point_to_line_distance(p: Vec2, m: f32, c: f32) -> Option<f32> {
    if !p.x.is_finite() || !p.y.is_finite() {
        return None;
    }
    let d = (m * p.x - p.y + c).abs() / (m * m + 1.0).sqrt();
    d.is_finite().then_some(d)
}
