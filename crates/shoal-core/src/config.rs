//! Simulation time and configuration.
//!
//! Time is a bare monotonically increasing `Tick` counter.  One tick advances
//! every agent once; a trial runs until every Free fish has committed to a
//! side or the step cap is hit.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level trial configuration.
///
/// Everything geometric (arena extent, obstacle vertices, decision and shaded
/// thresholds, spawn box) is a fixed constant of the model, calibrated against
/// the experimental tank — only population composition, the optional refuge
/// bias, and reproducibility knobs are configurable.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of Free fish in the shoal.
    pub fish_count: usize,

    /// Scripted replicas steering toward the top refuge.
    pub replicas_top: usize,

    /// Scripted replicas steering toward the bottom refuge.
    pub replicas_bottom: usize,

    /// Optional bias strength pulling fish toward the refuge point of their
    /// current vertical half.  `None` disables the term entirely.
    pub refugia_force: Option<f32>,

    /// Trial RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Convergence cap: a trial whose shoal has not fully decided within this
    /// many ticks is reported as a convergence failure, never looped forever.
    pub max_steps: u64,
}

impl SimConfig {
    /// Generous default step cap; observed trials decide within a few
    /// thousand ticks.
    pub const DEFAULT_MAX_STEPS: u64 = 100_000;

    /// A shoal of `fish_count` Free fish, no replicas, no refuge bias.
    pub fn shoal_of(fish_count: usize, seed: u64) -> Self {
        Self {
            fish_count,
            replicas_top: 0,
            replicas_bottom: 0,
            refugia_force: None,
            seed,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Total population size including replicas.
    #[inline]
    pub fn population(&self) -> usize {
        self.fish_count + self.replicas_top + self.replicas_bottom
    }
}
