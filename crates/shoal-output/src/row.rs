//! Plain data row types written by output backends.

use shoal_core::SimConfig;
use shoal_sim::TrialOutcome;

/// One trial's final tally — one row per trial in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRow {
    pub trial:           u64,
    pub seed:            u64,
    pub fish_count:      u64,
    pub replicas_top:    u64,
    pub replicas_bottom: u64,
    /// Tick of the last commitment; the step cap for non-convergent trials.
    pub final_tick:      u64,
    pub top:             u64,
    pub bottom:          u64,
    pub proportion_top:  f64,
    pub converged:       bool,
}

impl TrialRow {
    /// Row for a converged trial.
    pub fn converged(trial: u64, config: &SimConfig, outcome: &TrialOutcome) -> Self {
        Self {
            trial,
            seed:            outcome.seed,
            fish_count:      config.fish_count as u64,
            replicas_top:    config.replicas_top as u64,
            replicas_bottom: config.replicas_bottom as u64,
            final_tick:      outcome.decided_at.0,
            top:             outcome.top as u64,
            bottom:          outcome.bottom as u64,
            proportion_top:  outcome.proportion_top(),
            converged:       true,
        }
    }

    /// Row for a trial that hit the step cap before the shoal fully decided.
    pub fn timed_out(trial: u64, config: &SimConfig, seed: u64) -> Self {
        Self {
            trial,
            seed,
            fish_count:      config.fish_count as u64,
            replicas_top:    config.replicas_top as u64,
            replicas_bottom: config.replicas_bottom as u64,
            final_tick:      config.max_steps,
            top:             0,
            bottom:          0,
            proportion_top:  0.0,
            converged:       false,
        }
    }
}

/// A snapshot of one fish's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub fish_id:  u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
    /// `"top"`, `"bottom"`, or `""` while undecided.
    pub decision: &'static str,
}
