//! `cc-output`: turn scheduler output writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                                     |
//! |-----------|-------------|-------------------------------------------------------------------|
//! | *(none)*  | CSV         | `daily_records.csv`, `ship_snapshots.csv`, `month_summaries.csv`  |
//! | `sqlite`  | SQLite      | `output.db`                                                       |
//!
//! Both implement [`OutputWriter`] and are driven by [`TurnOutputObserver`],
//! which implements `cc_sim::TurnObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, TurnOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = TurnOutputObserver::new(writer);
//! scheduler.run_months(12, ships, &mut obs);
//! obs.finish().unwrap_or_else(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TurnOutputObserver;
pub use row::{DailyRecordRow, MonthSummaryRow, ShipSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
