//! CSV plan loader.
//!
//! # CSV format
//!
//! One row per planned month.  `decisions` is a JSON document; an empty
//! cell means `{}`.  A month listed twice keeps its last row.
//!
//! ```csv
//! month,decisions
//! February,"{""production_bpd"": 120000}"
//! March,"{""production_bpd"": 95000, ""charter"": ""VLCC Petromax""}"
//! ```

use std::io::Read;
use std::path::Path;

use cc_core::Month;
use serde::Deserialize;

use crate::planning::empty_decisions;
use crate::{PlanningSchedule, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlanRecord {
    month:     String,
    decisions: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `PlanningSchedule` from a CSV file.
pub fn load_plans_csv(path: &Path) -> Result<PlanningSchedule, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_plans_reader(file)
}

/// Like [`load_plans_csv`] but accepts any `Read` source.
pub fn load_plans_reader<R: Read>(reader: R) -> Result<PlanningSchedule, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut schedule = PlanningSchedule::new();

    for (row, result) in csv_reader.deserialize::<PlanRecord>().enumerate() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let month: Month = record
            .month
            .parse()
            .map_err(|e| ScheduleError::Parse(format!("row {}: {e}", row + 1)))?;

        let text = record.decisions.trim();
        let decisions = if text.is_empty() {
            empty_decisions()
        } else {
            serde_json::from_str(text).map_err(|e| {
                ScheduleError::Parse(format!("row {} ({month}): invalid decisions JSON: {e}", row + 1))
            })?
        };

        if schedule.set(month, decisions).is_some() {
            tracing::debug!(%month, "plan row overrides earlier row");
        }
    }

    Ok(schedule)
}
