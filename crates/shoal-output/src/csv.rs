//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trials.csv` — one row per trial (the choice-proportion data)
//! - `snapshots.csv` — per-fish trajectory samples

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow, TrialRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trials:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trials = Writer::from_path(dir.join("trials.csv"))?;
        trials.write_record([
            "trial",
            "seed",
            "fish_count",
            "replicas_top",
            "replicas_bottom",
            "final_tick",
            "top",
            "bottom",
            "proportion_top",
            "converged",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(["fish_id", "tick", "x", "y", "vx", "vy", "decision"])?;

        Ok(Self {
            trials,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.trial.to_string(),
            row.seed.to_string(),
            row.fish_count.to_string(),
            row.replicas_top.to_string(),
            row.replicas_bottom.to_string(),
            row.final_tick.to_string(),
            row.top.to_string(),
            row.bottom.to_string(),
            row.proportion_top.to_string(),
            (row.converged as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.fish_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.decision.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trials.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
