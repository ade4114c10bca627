//! Batch runner: many independent trials from one base seed.

use shoal_core::{SimConfig, TrialRng};

use crate::{NoopObserver, SimError, SimResult, SimulationBuilder, TrialOutcome};

// ── BatchReport ───────────────────────────────────────────────────────────────

/// Aggregate result of a batch of trials.
///
/// The distribution of [`TrialOutcome::proportion_top`] across trials is the
/// model's primary observable.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchReport {
    /// Outcome of every trial that converged, in trial order.
    pub outcomes: Vec<TrialOutcome>,
    /// Seeds of trials that hit the step cap without full commitment.
    pub non_convergent: Vec<u64>,
}

impl BatchReport {
    /// Top-route choice proportion of each converged trial.
    pub fn proportions(&self) -> Vec<f64> {
        self.outcomes.iter().map(TrialOutcome::proportion_top).collect()
    }

    /// Mean top-route proportion across converged trials.
    pub fn mean_proportion_top(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.outcomes.iter().map(TrialOutcome::proportion_top).sum();
        sum / self.outcomes.len() as f64
    }
}

// ── Batch runner ──────────────────────────────────────────────────────────────

/// Run `trials` independent trials of `config`, one derived seed each.
///
/// Trial `t` runs under `TrialRng::trial_seed(config.seed, t)`, so the whole
/// batch reproduces from the one base seed regardless of how many trials run
/// or in what order.  Non-convergent trials are recorded, never fatal; a
/// configuration error aborts the batch.
///
/// With the `parallel` Cargo feature, trials run on Rayon's thread pool.
pub fn run_batch(config: &SimConfig, trials: u64) -> SimResult<BatchReport> {
    let results = run_all(config, trials);

    let mut report = BatchReport::default();
    for (seed, result) in results {
        match result {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(SimError::NonConvergence { .. }) => report.non_convergent.push(seed),
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

fn run_trial(config: &SimConfig, seed: u64) -> SimResult<TrialOutcome> {
    let trial_config = SimConfig { seed, ..config.clone() };
    let mut sim = SimulationBuilder::new(trial_config).build()?;
    sim.run_to_decision(&mut NoopObserver)
}

#[cfg(not(feature = "parallel"))]
fn run_all(config: &SimConfig, trials: u64) -> Vec<(u64, SimResult<TrialOutcome>)> {
    (0..trials)
        .map(|t| {
            let seed = TrialRng::trial_seed(config.seed, t);
            (seed, run_trial(config, seed))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all(config: &SimConfig, trials: u64) -> Vec<(u64, SimResult<TrialOutcome>)> {
    use rayon::prelude::*;

    (0..trials)
        .into_par_iter()
        .map(|t| {
            let seed = TrialRng::trial_seed(config.seed, t);
            (seed, run_trial(config, seed))
        })
        .collect()
}
