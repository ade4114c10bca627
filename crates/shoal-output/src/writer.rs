//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SnapshotRow, TrialRow};

/// Trait implemented by output backends (currently CSV).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ShoalOutputObserver::take_error`][crate::ShoalOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one trial's final tally.
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Write a batch of per-fish trajectory snapshots.
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
