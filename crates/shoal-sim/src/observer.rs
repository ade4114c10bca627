//! Trial observer trait for progress reporting and data collection.

use shoal_agent::Shoal;
use shoal_core::Tick;

/// Callbacks invoked by [`Simulation::run_to_decision`][crate::Simulation]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ShoalObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, shoal: &Shoal) {
///         if tick.0 % self.interval == 0 {
///             let (top, bottom) = shoal.tally();
///             println!("{tick}: {top} top / {bottom} bottom");
///         }
///     }
/// }
/// ```
pub trait ShoalObserver {
    /// Called at the very start of each tick, before any fish moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every fish has been advanced this tick.
    ///
    /// The shoal is in its post-tick state; positions, velocities, and
    /// decisions are all current.
    fn on_tick_end(&mut self, _tick: Tick, _shoal: &Shoal) {}

    /// Called once when the trial ends, whether or not it converged.
    ///
    /// `top` and `bottom` count Free-fish decisions at the final tick.
    fn on_trial_end(&mut self, _final_tick: Tick, _top: usize, _bottom: usize) {}
}

/// A [`ShoalObserver`] that does nothing.  Use when you need to call
/// `run_to_decision` but don't want callbacks.
pub struct NoopObserver;

impl ShoalObserver for NoopObserver {}
