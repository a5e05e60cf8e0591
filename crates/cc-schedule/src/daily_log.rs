//! `DailyLog`: one record per simulated day, grouped by executed month.
//!
//! Each `advance_month` opens a new `MonthLog` segment.  Segments are keyed
//! by `(month, turn)` so the second January of a run never merges into the
//! first, while [`DailyLog::entries_for`] still answers "everything logged
//! under January" across years.

use std::collections::VecDeque;

use cc_core::{Month, Retention};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// What happened on one simulated day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRecord {
    pub month:      Month,
    /// Calendar turn the month was executed in (1 for the first advance).
    pub turn:       u64,
    /// 1-based day of the month.
    pub day:        u32,
    /// The decisions in force for the month.
    pub decisions:  Value,
    /// Ships inside an island's collision buffer at the end of the day.
    pub collisions: u32,
    /// Wall-clock time the record was written.
    pub timestamp:  DateTime<Utc>,
}

/// All records of one executed month.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthLog {
    pub month:   Month,
    pub turn:    u64,
    pub records: Vec<DailyRecord>,
}

impl MonthLog {
    pub fn new(month: Month, turn: u64) -> Self {
        Self { month, turn, records: Vec::new() }
    }
}

/// Append-only daily log with a month-granular retention policy.
#[derive(Clone, Debug, Default)]
pub struct DailyLog {
    segments:  VecDeque<MonthLog>,
    retention: Retention,
}

impl DailyLog {
    pub fn new(retention: Retention) -> Self {
        Self { segments: VecDeque::new(), retention }
    }

    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Open the segment for `month` executed in `turn`, evicting the oldest
    /// segments the retention policy no longer covers.
    pub fn begin_month(&mut self, month: Month, turn: u64) {
        self.segments.push_back(MonthLog::new(month, turn));
        if let Retention::LastMonths(keep) = self.retention {
            let keep = keep.max(1);
            while self.segments.len() > keep {
                if let Some(evicted) = self.segments.pop_front() {
                    tracing::debug!(
                        month = %evicted.month,
                        turn = evicted.turn,
                        records = evicted.records.len(),
                        "daily log segment evicted"
                    );
                }
            }
        }
    }

    /// Append `record` to the segment it belongs to.  A record for a month
    /// or turn other than the open segment's opens a new segment first.
    pub fn append(&mut self, record: DailyRecord) {
        let matches_open = self
            .segments
            .back()
            .is_some_and(|s| s.month == record.month && s.turn == record.turn);
        if !matches_open {
            self.begin_month(record.month, record.turn);
        }
        if let Some(segment) = self.segments.back_mut() {
            segment.records.push(record);
        }
    }

    /// All retained records logged under `month`, oldest first.
    pub fn entries_for(&self, month: Month) -> Vec<&DailyRecord> {
        self.segments
            .iter()
            .filter(|s| s.month == month)
            .flat_map(|s| s.records.iter())
            .collect()
    }

    /// The most recent segment, usually the month just executed.
    pub fn latest(&self) -> Option<&MonthLog> {
        self.segments.back()
    }

    pub fn segments(&self) -> impl Iterator<Item = &MonthLog> + '_ {
        self.segments.iter()
    }

    pub fn month_count(&self) -> usize {
        self.segments.len()
    }

    /// Total retained records.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.records.is_empty())
    }
}
