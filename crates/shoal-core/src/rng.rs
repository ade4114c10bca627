//! Deterministic per-fish and trial-level RNG wrappers, plus the
//! truncated-normal draw used throughout the behavioral model.
//!
//! # Determinism strategy
//!
//! Each fish gets its own independent `SmallRng` seeded by:
//!
//!   seed = trial_seed XOR (fish_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive fish IDs uniformly across the seed space.
//! This means:
//!
//! - Fish never share RNG state (no ordering dependency between agents'
//!   stochastic draws).
//! - Batch trials derive their own trial seeds the same way, so trials are
//!   statistically independent yet reproducible from one base seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::FishId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Truncated normal ──────────────────────────────────────────────────────────

/// Draw from a normal distribution restricted to `[low, upp]`.
///
/// Sampling is by rejection, which is cheap here: every call site in the
/// behavioral model truncates within a few standard deviations of the mean.
/// A bounded retry count guards against pathological parameters; on
/// exhaustion the draw degrades to the clamped mean.
///
/// `sd <= 0` returns `mean.clamp(low, upp)` exactly — this is the path the
/// tests use to switch the model's noise off.
pub fn trunc_normal(rng: &mut SmallRng, mean: f32, sd: f32, low: f32, upp: f32) -> f32 {
    debug_assert!(low <= upp, "trunc_normal: low {low} > upp {upp}");
    if sd <= 0.0 {
        return mean.clamp(low, upp);
    }
    // Normal::new only fails for non-finite or non-positive sd, both
    // excluded above.
    let Ok(normal) = Normal::new(mean, sd) else {
        return mean.clamp(low, upp);
    };
    for _ in 0..64 {
        let x = normal.sample(rng);
        if (low..=upp).contains(&x) {
            return x;
        }
    }
    mean.clamp(low, upp)
}

// ── FishRng ───────────────────────────────────────────────────────────────────

/// Per-fish deterministic RNG.
///
/// Create one per fish at simulation construction; store in a `Vec<FishRng>`
/// parallel to the population so the update loop can borrow one fish's RNG
/// mutably while reading the rest of the shoal.
pub struct FishRng(SmallRng);

impl FishRng {
    /// Seed deterministically from the trial's seed and a fish ID.
    pub fn new(trial_seed: u64, fish: FishId) -> Self {
        let seed = trial_seed ^ (fish.0 as u64).wrapping_mul(MIXING_CONSTANT);
        FishRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Truncated-normal draw from this fish's stream.
    #[inline]
    pub fn trunc_normal(&mut self, mean: f32, sd: f32, low: f32, upp: f32) -> f32 {
        trunc_normal(&mut self.0, mean, sd, low, upp)
    }
}

// ── TrialRng ──────────────────────────────────────────────────────────────────

/// Trial-level RNG for population setup (spawn positions, initial headings).
///
/// Used only during construction and other single-threaded contexts.  Batch
/// runs give each trial its own `TrialRng` derived from the base seed.
pub struct TrialRng(SmallRng);

impl TrialRng {
    pub fn new(seed: u64) -> Self {
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive the seed for trial number `trial` from a batch base seed.
    #[inline]
    pub fn trial_seed(base_seed: u64, trial: u64) -> u64 {
        base_seed ^ trial.wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
