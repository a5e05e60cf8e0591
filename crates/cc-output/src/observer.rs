//! `TurnOutputObserver<W>`: bridges `TurnObserver` to an `OutputWriter`.

use cc_fleet::Ship;
use cc_schedule::{DailyRecord, MonthSummary};
use cc_sim::TurnObserver;

use crate::row::{DailyRecordRow, MonthSummaryRow, ShipSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TurnObserver`] that writes daily records, ship snapshots, and month
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TurnObserver`
/// methods have no return value.  After the run, call
/// [`finish`][Self::finish] or [`take_error`][Self::take_error].
pub struct TurnOutputObserver<W: OutputWriter> {
    writer:              W,
    /// Ship snapshots are written every `snapshot_interval` days; 0 disables.
    snapshot_interval:   u32,
    last_error:          Option<OutputError>,
}

impl<W: OutputWriter> TurnOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots ships daily.
    pub fn new(writer: W) -> Self {
        Self { writer, snapshot_interval: 1, last_error: None }
    }

    /// Snapshot ships only on days divisible by `days` (0 = never).
    pub fn snapshot_every(mut self, days: u32) -> Self {
        self.snapshot_interval = days;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Finish the writer, reporting the first stored error before any error
    /// from finishing itself.
    pub fn finish(&mut self) -> OutputResult<()> {
        let finished = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => finished,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TurnObserver for TurnOutputObserver<W> {
    fn on_day_end(&mut self, record: &DailyRecord, ships: &[Ship]) {
        let result = self.writer.write_daily_record(&DailyRecordRow::from(record));
        self.store_err(result);

        if self.snapshot_interval > 0 && record.day.is_multiple_of(self.snapshot_interval) {
            let rows: Vec<ShipSnapshotRow> = ships
                .iter()
                .map(|s| ShipSnapshotRow::new(record.turn, record.day, s))
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_month_end(&mut self, summary: &MonthSummary, _ships: &[Ship]) {
        let result = MonthSummaryRow::from_summary(summary)
            .and_then(|row| self.writer.write_month_summary(&row));
        self.store_err(result);
    }
}
