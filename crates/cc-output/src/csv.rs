//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `daily_records.csv`
//! - `ship_snapshots.csv`
//! - `month_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailyRecordRow, MonthSummaryRow, OutputResult, ShipSnapshotRow};

/// Writes scheduler output to three CSV files.
pub struct CsvWriter {
    days:      Writer<File>,
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut days = Writer::from_path(dir.join("daily_records.csv"))?;
        days.write_record(["turn", "month", "day", "collisions", "decisions", "timestamp"])?;

        let mut snapshots = Writer::from_path(dir.join("ship_snapshots.csv"))?;
        snapshots.write_record([
            "turn", "day", "ship_id", "name", "x", "y", "heading", "destination_id",
            "current_inventory_bbl", "available_capacity_bbl",
        ])?;

        let mut summaries = Writer::from_path(dir.join("month_summaries.csv"))?;
        summaries.write_record([
            "turn", "month", "day_count", "collision_days", "decision_totals",
            "started_at", "finished_at",
        ])?;

        Ok(Self { days, snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_daily_record(&mut self, row: &DailyRecordRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.turn.to_string(),
            row.month.to_owned(),
            row.day.to_string(),
            row.collisions.to_string(),
            row.decisions.clone(),
            row.timestamp.clone(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ShipSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.turn.to_string(),
                row.day.to_string(),
                row.ship_id.to_string(),
                row.name.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                row.destination_id.to_string(),
                row.current_inventory_bbl.to_string(),
                row.available_capacity_bbl.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_month_summary(&mut self, row: &MonthSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.turn.to_string(),
            row.month.to_owned(),
            row.day_count.to_string(),
            row.collision_days.to_string(),
            row.decision_totals.clone(),
            row.started_at.clone(),
            row.finished_at.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
