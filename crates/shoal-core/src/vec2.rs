//! Immutable 2-D vector value type.
//!
//! `Vec2` uses `f32` components — the arena is 1400×800 length units, so
//! single precision leaves ample headroom while keeping agent state compact.
//!
//! Every operation returns a *new* vector.  In-place rotation invites
//! shared-mutation bugs when the same vector is referenced from two agents;
//! value semantics make that unrepresentable.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D vector stored as single-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Normalize an angle in radians into `(−π, π]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Scale by `k`.
    #[inline]
    pub fn scale(self, k: f32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// Callers must handle `None` explicitly — there is no silent
    /// divide-by-zero path.
    pub fn normalize(self) -> Option<Vec2> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(self.scale(1.0 / mag))
        }
    }

    /// Heading angle in radians: `atan2(y, x)`, in `(−π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// A new vector rotated counterclockwise by `theta` radians.
    pub fn rotate(self, theta: f32) -> Vec2 {
        let (sin, cos) = theta.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Signed angle from `self`'s heading to `other`'s, normalized to
    /// `(−π, π]`.  Positive means `other` lies counterclockwise of `self`.
    #[inline]
    pub fn angle_between(self, other: Vec2) -> f32 {
        wrap_angle(other.angle() - self.angle())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).magnitude()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
