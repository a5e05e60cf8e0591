//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `daily_records`, `ship_snapshots`, and `month_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DailyRecordRow, MonthSummaryRow, OutputResult, ShipSnapshotRow};

/// Writes scheduler output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS daily_records (
                 turn       INTEGER NOT NULL,
                 month      TEXT    NOT NULL,
                 day        INTEGER NOT NULL,
                 collisions INTEGER NOT NULL,
                 decisions  TEXT    NOT NULL,
                 timestamp  TEXT    NOT NULL,
                 PRIMARY KEY (turn, day)
             );
             CREATE TABLE IF NOT EXISTS ship_snapshots (
                 turn                   INTEGER NOT NULL,
                 day                    INTEGER NOT NULL,
                 ship_id                INTEGER NOT NULL,
                 name                   TEXT    NOT NULL,
                 x                      REAL    NOT NULL,
                 y                      REAL    NOT NULL,
                 heading                REAL    NOT NULL,
                 destination_id         INTEGER NOT NULL,
                 current_inventory_bbl  INTEGER NOT NULL,
                 available_capacity_bbl INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS month_summaries (
                 turn            INTEGER PRIMARY KEY,
                 month           TEXT    NOT NULL,
                 day_count       INTEGER NOT NULL,
                 collision_days  INTEGER NOT NULL,
                 decision_totals TEXT    NOT NULL,
                 started_at      TEXT    NOT NULL,
                 finished_at     TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_daily_record(&mut self, row: &DailyRecordRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO daily_records (turn, month, day, collisions, decisions, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.turn as i64,
                row.month,
                row.day,
                row.collisions,
                row.decisions,
                row.timestamp,
            ],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ShipSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO ship_snapshots \
                 (turn, day, ship_id, name, x, y, heading, destination_id, \
                  current_inventory_bbl, available_capacity_bbl) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.turn as i64,
                    row.day,
                    row.ship_id,
                    row.name,
                    row.x,
                    row.y,
                    row.heading,
                    row.destination_id,
                    row.current_inventory_bbl as i64,
                    row.available_capacity_bbl as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_month_summary(&mut self, row: &MonthSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO month_summaries \
             (turn, month, day_count, collision_days, decision_totals, started_at, finished_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.turn as i64,
                row.month,
                row.day_count,
                row.collision_days,
                row.decision_totals,
                row.started_at,
                row.finished_at,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
