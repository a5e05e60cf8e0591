//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DailyRecordRow, MonthSummaryRow, OutputResult, ShipSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by [`TurnOutputObserver`][crate::TurnOutputObserver]
/// and surfaced from its `finish`.
pub trait OutputWriter {
    fn write_daily_record(&mut self, row: &DailyRecordRow) -> OutputResult<()>;

    /// Write a batch of ship snapshots.
    fn write_snapshots(&mut self, rows: &[ShipSnapshotRow]) -> OutputResult<()>;

    fn write_month_summary(&mut self, row: &MonthSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
