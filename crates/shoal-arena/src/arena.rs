//! Arena extent, spawn box, thresholds, and refuge geometry.

use shoal_core::Vec2;

/// Which half of the arena, split at the horizontal midline.
///
/// Doubles as the binary choice a fish commits to at the decision line.
/// `Top` is the low-`y` half (screen coordinates: y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Bottom,
}

/// The experimental tank.
///
/// All values are length units of the digitized video footage.  They are
/// calibration constants, not tunables — `Arena::standard()` is the only
/// construction path the simulation uses; tests may build custom arenas.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub width:  f32,
    pub height: f32,

    /// Square spawn region for Free fish: `(left, top)` corner and side length.
    pub spawn_left: f32,
    pub spawn_top:  f32,
    pub spawn_size: f32,

    /// Crossing below this x commits a fish to its current vertical half.
    pub decision_x: f32,
    /// Crossing below this x freezes a decided fish in its refuge corner.
    pub shaded_area_x: f32,
}

impl Arena {
    /// How far inside the shaded corner a frozen fish is pinned.
    pub const CORNER_PIN_INSET: f32 = 10.0;

    /// The digitized tank: 1400×800, 120-unit spawn box on the right,
    /// decision line at x = 520, shaded area past x = 280.
    pub fn standard() -> Self {
        Self {
            width:         1400.0,
            height:        800.0,
            spawn_left:    1240.0,
            spawn_top:     335.0,
            spawn_size:    120.0,
            decision_x:    520.0,
            shaded_area_x: 280.0,
        }
    }

    /// `true` if `p` lies within `[0, width] × [0, height]`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// The vertical half `p` currently occupies.
    #[inline]
    pub fn side_of(&self, p: Vec2) -> Side {
        if p.y < self.height / 2.0 { Side::Top } else { Side::Bottom }
    }

    /// The shaded-corner point a frozen fish is pinned to on `side`.
    pub fn corner_pin(&self, side: Side) -> Vec2 {
        match side {
            Side::Top => Vec2::new(Self::CORNER_PIN_INSET, Self::CORNER_PIN_INSET),
            Side::Bottom => {
                Vec2::new(Self::CORNER_PIN_INSET, self.height - Self::CORNER_PIN_INSET)
            }
        }
    }

    /// Fixed reference point the optional refuge bias steers toward.
    ///
    /// Coincides with the corner pins: the terminal destination of each half.
    #[inline]
    pub fn refuge_point(&self, side: Side) -> Vec2 {
        self.corner_pin(side)
    }

    /// Where a scripted replica enters the tank for `side`.
    pub fn replica_start(&self, side: Side) -> Vec2 {
        let x = self.width - 40.0;
        match side {
            Side::Top => Vec2::new(x, self.spawn_top + 40.0),
            Side::Bottom => Vec2::new(x, self.spawn_top + self.spawn_size - 40.0),
        }
    }

    /// The exit point a scripted replica swims a straight line toward.
    pub fn replica_target(&self, side: Side) -> Vec2 {
        match side {
            Side::Top => Vec2::new(0.0, 80.0),
            Side::Bottom => Vec2::new(0.0, 720.0),
        }
    }

    /// Uniform random spawn position inside the spawn box.
    pub fn spawn_position(&self, rng: &mut shoal_core::TrialRng) -> Vec2 {
        Vec2::new(
            self.spawn_left + rng.gen_range(0.0..self.spawn_size),
            self.spawn_top + rng.gen_range(0.0..self.spawn_size),
        )
    }
}
