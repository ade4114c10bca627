//! `shoal-output` — simulation output writers.
//!
//! Two CSV files cover the model's observables:
//!
//! | File            | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | `trials.csv`    | one row per trial: tally, proportion, convergence   |
//! | `snapshots.csv` | per-fish trajectory samples at a fixed tick interval|
//!
//! The backend implements [`OutputWriter`]; trajectory sampling is driven by
//! [`ShoalOutputObserver`], which implements `shoal_sim::ShoalObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shoal_output::{CsvWriter, OutputWriter, ShoalOutputObserver, TrialRow};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ShoalOutputObserver::new(writer, 50);
//! let outcome = sim.run_to_decision(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let mut writer = obs.into_writer();
//! writer.write_trial(&TrialRow::converged(0, &config, &outcome))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ShoalOutputObserver;
pub use row::{SnapshotRow, TrialRow};
pub use writer::OutputWriter;
