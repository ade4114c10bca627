//! `ShoalOutputObserver<W>` — bridges `ShoalObserver` to an `OutputWriter`.

use shoal_agent::Shoal;
use shoal_arena::Side;
use shoal_core::Tick;
use shoal_sim::ShoalObserver;

use crate::OutputError;
use crate::row::SnapshotRow;
use crate::writer::OutputWriter;

/// A [`ShoalObserver`] that samples per-fish trajectory snapshots into any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ShoalObserver`
/// methods have no return value.  After the trial returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct ShoalOutputObserver<W: OutputWriter> {
    writer:         W,
    /// Snapshot every this-many ticks; `0` disables trajectory output.
    interval_ticks: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> ShoalOutputObserver<W> {
    pub fn new(writer: W, interval_ticks: u64) -> Self {
        Self { writer, interval_ticks, last_error: None }
    }

    /// Take the stored write error (if any) after the trial returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to write trial rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ShoalObserver for ShoalOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, shoal: &Shoal) {
        if self.interval_ticks == 0 || !tick.0.is_multiple_of(self.interval_ticks) {
            return;
        }

        let rows: Vec<SnapshotRow> = shoal
            .fish
            .iter()
            .enumerate()
            .map(|(i, fish)| SnapshotRow {
                fish_id:  i as u32,
                tick:     tick.0,
                x:        fish.position.x,
                y:        fish.position.y,
                vx:       fish.velocity.x,
                vy:       fish.velocity.y,
                decision: match fish.decision {
                    Some(Side::Top) => "top",
                    Some(Side::Bottom) => "bottom",
                    None => "",
                },
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_trial_end(&mut self, _final_tick: Tick, _top: usize, _bottom: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
