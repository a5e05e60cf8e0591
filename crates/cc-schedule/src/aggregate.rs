//! Month aggregation.

use std::collections::BTreeMap;

use cc_core::Month;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::MonthLog;

/// Roll-up of one executed month.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthSummary {
    pub month:           Month,
    pub turn:            u64,
    pub day_count:       u32,
    pub first_day:       Option<u32>,
    pub last_day:        Option<u32>,
    pub started_at:      Option<DateTime<Utc>>,
    pub finished_at:     Option<DateTime<Utc>>,
    /// Per-field sums of the numeric top-level fields of object decisions.
    pub decision_totals: BTreeMap<String, f64>,
    /// Days on which at least one ship was inside an island's buffer.
    pub collision_days:  u32,
}

/// Summarise the records of `log`.
pub fn aggregate(log: &MonthLog) -> MonthSummary {
    let records = &log.records;
    let mut decision_totals = BTreeMap::new();
    let mut collision_days = 0;

    for record in records {
        if let Value::Object(fields) = &record.decisions {
            for (key, value) in fields {
                if let Some(n) = value.as_f64() {
                    *decision_totals.entry(key.clone()).or_insert(0.0) += n;
                }
            }
        }
        if record.collisions > 0 {
            collision_days += 1;
        }
    }

    MonthSummary {
        month:       log.month,
        turn:        log.turn,
        day_count:   records.len() as u32,
        first_day:   records.first().map(|r| r.day),
        last_day:    records.last().map(|r| r.day),
        started_at:  records.first().map(|r| r.timestamp),
        finished_at: records.last().map(|r| r.timestamp),
        decision_totals,
        collision_days,
    }
}
