//! `shoal-sim` — trial driver and batch runner.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_steps:
//!   for each fish in ascending index order:
//!     ① Perceive  — nearest and second-nearest visible neighbors.
//!     ② Turn      — sinusoidal response (+ refuge bias, or wander).
//!     ③ Accelerate— baseline + neighbor bands + wall term, speed-capped.
//!     ④ Move      — integrate; bounce off walls; expel from the obstacle.
//!     ⑤ Decide    — commit a side past the decision line; freeze in shade.
//!   stop once every Free fish has committed
//! ```
//!
//! Fish update in place, so earlier fish are perceived at their new state by
//! later ones within the same tick.  Determinism comes from per-fish RNG
//! streams: one seed, one trajectory.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs batch trials on Rayon's thread pool.         |
//! | `serde`    | Serde derives on outcome and report types.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use shoal_core::SimConfig;
//! use shoal_sim::{NoopObserver, SimulationBuilder, run_batch};
//!
//! let mut sim = SimulationBuilder::new(SimConfig::shoal_of(8, 42)).build()?;
//! let outcome = sim.run_to_decision(&mut NoopObserver)?;
//!
//! let report = run_batch(&SimConfig::shoal_of(8, 42), 500)?;
//! println!("mean P(top) = {:.3}", report.mean_proportion_top());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use batch::{BatchReport, run_batch};
pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ShoalObserver};
pub use sim::{Simulation, StepReport, TrialOutcome};
