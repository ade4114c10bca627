//! The `Simulation` struct and its tick loop.

use shoal_agent::{FishRngs, Shoal};
use shoal_arena::{Arena, Obstacle};
use shoal_behavior::{NoiseProfile, advance};
use shoal_core::{FishId, SimConfig, Tick};

use crate::{ShoalObserver, SimError, SimResult};

// ── Reports ───────────────────────────────────────────────────────────────────

/// State of the shoal after one tick.
#[derive(Copy, Clone, Debug)]
pub struct StepReport {
    /// `true` once every Free fish has committed to a side.
    pub all_decided: bool,
    /// Free fish committed to the top route so far.
    pub top: usize,
    /// Free fish committed to the bottom route so far.
    pub bottom: usize,
}

/// Final result of one converged trial.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    /// Seed the trial ran under.
    pub seed: u64,
    /// Tick at which the last Free fish committed.
    pub decided_at: Tick,
    /// Free fish that passed the obstacle above.
    pub top: usize,
    /// Free fish that passed the obstacle below.
    pub bottom: usize,
}

impl TrialOutcome {
    /// Fraction of the shoal that chose the top route.
    pub fn proportion_top(&self) -> f64 {
        let total = self.top + self.bottom;
        if total == 0 { 0.0 } else { self.top as f64 / total as f64 }
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One trial: a shoal swimming the bifurcation arena until every Free fish
/// has committed to a side.
///
/// # Tick loop
///
/// Each tick advances fish in ascending index order.  A fish is copied out,
/// updated against the current population, and written back before the next
/// fish moves, so fish earlier in the order are perceived at their new state
/// by fish later in it.  One pass per fish per tick, per-fish RNG streams —
/// the whole trial is a pure function of its seed.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    /// Trial configuration (population, seed, step cap).
    pub config: SimConfig,

    /// Tank geometry and decision thresholds.
    pub arena: Arena,

    /// The bifurcating triangle.
    pub obstacle: Obstacle,

    /// Per-draw noise levels; [`NoiseProfile::calibrated`] outside tests.
    pub noise: NoiseProfile,

    /// Current tick.
    pub clock: Tick,

    /// The population, Free fish first.
    pub shoal: Shoal,

    /// Per-fish deterministic RNGs, parallel to `shoal.fish`.
    pub rngs: FishRngs,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every fish by one tick and report the decision tally.
    pub fn step(&mut self) -> StepReport {
        for i in 0..self.shoal.fish.len() {
            // Copy-out / write-back: lets the update borrow the whole
            // population immutably while mutating this one fish.
            let mut fish = self.shoal.fish[i];
            let rng = self.rngs.get_mut(FishId(i as u32));
            advance(
                &mut fish,
                i,
                &self.shoal.fish,
                &self.arena,
                &self.obstacle,
                &self.noise,
                rng,
            );
            self.shoal.fish[i] = fish;
        }
        self.clock = self.clock + 1;

        let (top, bottom) = self.shoal.tally();
        StepReport { all_decided: top + bottom == self.shoal.free_count, top, bottom }
    }

    /// Run until every Free fish has decided, or fail with
    /// [`SimError::NonConvergence`] at the step cap.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_to_decision<O: ShoalObserver>(&mut self, observer: &mut O) -> SimResult<TrialOutcome> {
        while self.clock.0 < self.config.max_steps {
            observer.on_tick_start(self.clock);
            let report = self.step();
            observer.on_tick_end(self.clock, &self.shoal);

            if report.all_decided {
                observer.on_trial_end(self.clock, report.top, report.bottom);
                return Ok(TrialOutcome {
                    seed:       self.config.seed,
                    decided_at: self.clock,
                    top:        report.top,
                    bottom:     report.bottom,
                });
            }
        }

        let (top, bottom) = self.shoal.tally();
        observer.on_trial_end(self.clock, top, bottom);
        Err(SimError::NonConvergence { steps: self.config.max_steps })
    }
}
