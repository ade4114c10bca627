//! headless — batch demo for the shoalsim collective-decision model.
//!
//! Runs many independent trials of an 8-fish shoal approaching the
//! bifurcating obstacle and writes the choice-proportion data to CSV.
//! The distribution of per-trial top-route proportions is the model's
//! primary observable; compare it against the digitized experimental
//! distributions before trusting any parameter change.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use shoal_core::SimConfig;
use shoal_output::{CsvWriter, OutputWriter, ShoalOutputObserver, TrialRow};
use shoal_sim::{SimulationBuilder, run_batch};

// ── Constants ─────────────────────────────────────────────────────────────────

const FISH_COUNT:        usize = 8;
const REPLICAS_TOP:      usize = 0;
const REPLICAS_BOTTOM:   usize = 0;
const TRIALS:            u64   = 500;
const SEED:              u64   = 42;
const SNAPSHOT_INTERVAL: u64   = 50; // trajectory sampling for the showcase trial

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== headless — shoalsim batch run ===");
    println!("Fish: {FISH_COUNT}  |  Trials: {TRIALS}  |  Seed: {SEED}");
    println!();

    let config = SimConfig {
        fish_count:      FISH_COUNT,
        replicas_top:    REPLICAS_TOP,
        replicas_bottom: REPLICAS_BOTTOM,
        refugia_force:   None,
        seed:            SEED,
        max_steps:       SimConfig::DEFAULT_MAX_STEPS,
    };

    // 1. Batch run (parallel across trials).
    let t0 = Instant::now();
    let report = run_batch(&config, TRIALS)?;
    let elapsed = t0.elapsed();
    println!(
        "Batch complete in {:.3} s — {} converged, {} hit the step cap",
        elapsed.as_secs_f64(),
        report.outcomes.len(),
        report.non_convergent.len(),
    );

    // 2. Write one row per trial.
    std::fs::create_dir_all("output/headless")?;
    let mut writer = CsvWriter::new(Path::new("output/headless"))?;
    for (trial, outcome) in report.outcomes.iter().enumerate() {
        writer.write_trial(&TrialRow::converged(trial as u64, &config, outcome))?;
    }
    for (i, &seed) in report.non_convergent.iter().enumerate() {
        let trial = report.outcomes.len() as u64 + i as u64;
        writer.write_trial(&TrialRow::timed_out(trial, &config, seed))?;
    }
    writer.finish()?;
    println!("Wrote output/headless/trials.csv");

    // 3. Showcase trial with trajectory snapshots, in its own directory so
    //    the batch files above are left alone.
    std::fs::create_dir_all("output/headless/showcase")?;
    let mut sim = SimulationBuilder::new(config.clone()).build()?;
    let showcase_writer = CsvWriter::new(Path::new("output/headless/showcase"))?;
    let mut obs = ShoalOutputObserver::new(showcase_writer, SNAPSHOT_INTERVAL);
    let outcome = sim.run_to_decision(&mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!(
        "Showcase trial: {} top / {} bottom, decided at {} — snapshots in output/headless/showcase/",
        outcome.top, outcome.bottom, outcome.decided_at,
    );
    println!();

    // 4. Choice-proportion histogram: how many trials split k fish to the top.
    let mut bins = vec![0usize; FISH_COUNT + 1];
    for outcome in &report.outcomes {
        bins[outcome.top] += 1;
    }
    let peak = bins.iter().copied().max().unwrap_or(1).max(1);

    println!("{:<12} {:<8} {}", "Top fish", "Trials", "Distribution");
    println!("{}", "-".repeat(56));
    for (k, &count) in bins.iter().enumerate() {
        let bar = "#".repeat(count * 32 / peak);
        println!("{:<12} {:<8} {}", format!("{k}/{FISH_COUNT}"), count, bar);
    }
    println!();
    println!("Mean P(top) = {:.3}", report.mean_proportion_top());

    Ok(())
}
