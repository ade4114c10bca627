//! Population storage: `Shoal` (all fish) and `FishRngs` (per-fish RNG).
//!
//! # Why two structs?
//!
//! The update loop needs `&mut FishRngs` (one fish's RNG at a time) and
//! `&Shoal` (read access to the whole population) simultaneously.  Rust's
//! borrow checker forbids this if both live inside a single struct; keeping
//! the RNGs separate resolves the conflict cleanly.

use shoal_arena::{Arena, Side};
use shoal_core::{FishId, FishRng, SimConfig, TrialRng};

use crate::{AgentKind, Fish};

// ── FishRngs ──────────────────────────────────────────────────────────────────

/// Per-fish deterministic RNG state, parallel to `Shoal::fish`.
pub struct FishRngs {
    pub inner: Vec<FishRng>,
}

impl FishRngs {
    /// Allocate and seed `count` per-fish RNGs from the trial seed.
    pub fn new(count: usize, trial_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| FishRng::new(trial_seed, FishId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one fish's RNG.
    #[inline]
    pub fn get_mut(&mut self, fish: FishId) -> &mut FishRng {
        &mut self.inner[fish.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Shoal ─────────────────────────────────────────────────────────────────────

/// The whole population of one trial: Free fish first (creation order), then
/// top replicas, then bottom replicas.  Order is fixed at construction and
/// never changes — a fish's index is its `FishId`.
pub struct Shoal {
    pub fish: Vec<Fish>,
    /// How many leading entries of `fish` are Free (the tallied shoal).
    pub free_count: usize,
}

impl Shoal {
    /// Build the population for `config`: spawn-box Free fish, then replicas.
    pub fn build(config: &SimConfig, arena: &Arena, rng: &mut TrialRng) -> (Shoal, FishRngs) {
        let mut fish = Vec::with_capacity(config.population());

        for _ in 0..config.fish_count {
            fish.push(Fish::spawn_free(arena, config.refugia_force, rng));
        }
        for _ in 0..config.replicas_top {
            fish.push(Fish::replica(arena, Side::Top));
        }
        for _ in 0..config.replicas_bottom {
            fish.push(Fish::replica(arena, Side::Bottom));
        }

        let rngs = FishRngs::new(fish.len(), config.seed);
        (Shoal { fish, free_count: config.fish_count }, rngs)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Iterator over all `FishId`s in ascending index order.
    pub fn fish_ids(&self) -> impl Iterator<Item = FishId> + '_ {
        (0..self.fish.len() as u32).map(FishId)
    }

    /// The Free fish only (replicas excluded).
    pub fn free_fish(&self) -> &[Fish] {
        &self.fish[..self.free_count]
    }

    /// Count decisions among Free fish: `(top, bottom)`.
    ///
    /// Replicas never contribute, whatever their position.
    pub fn tally(&self) -> (usize, usize) {
        let mut top = 0;
        let mut bottom = 0;
        for f in self.free_fish() {
            match f.decision {
                Some(Side::Top) => top += 1,
                Some(Side::Bottom) => bottom += 1,
                None => {}
            }
        }
        (top, bottom)
    }

    /// `true` once every Free fish has committed to a side.
    pub fn all_decided(&self) -> bool {
        let (top, bottom) = self.tally();
        top + bottom == self.free_count
    }

    /// Replica census by target side: `(toward_top, toward_bottom)`.
    pub fn replica_census(&self, arena: &Arena) -> (usize, usize) {
        let mut toward_top = 0;
        let mut toward_bottom = 0;
        for f in &self.fish {
            if let AgentKind::ScriptedReplica { target } = f.kind {
                if target == arena.replica_target(Side::Top) {
                    toward_top += 1;
                } else {
                    toward_bottom += 1;
                }
            }
        }
        (toward_top, toward_bottom)
    }
}
