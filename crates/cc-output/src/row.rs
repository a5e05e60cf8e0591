//! Flat row types written by output backends.

use cc_fleet::Ship;
use cc_schedule::{DailyRecord, MonthSummary};
use chrono::SecondsFormat;

use crate::OutputResult;

/// One simulated day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecordRow {
    pub turn:       u64,
    pub month:      &'static str,
    pub day:        u32,
    pub collisions: u32,
    /// The month's decisions as compact JSON.
    pub decisions:  String,
    /// RFC 3339, millisecond precision, UTC.
    pub timestamp:  String,
}

impl From<&DailyRecord> for DailyRecordRow {
    fn from(record: &DailyRecord) -> Self {
        Self {
            turn:       record.turn,
            month:      record.month.name(),
            day:        record.day,
            collisions: record.collisions,
            decisions:  record.decisions.to_string(),
            timestamp:  record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// One ship's state at the end of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSnapshotRow {
    pub turn:                   u64,
    pub day:                    u32,
    pub ship_id:                u32,
    pub name:                   String,
    pub x:                      f64,
    pub y:                      f64,
    pub heading:                f64,
    /// `u32::MAX` for ships without a destination.
    pub destination_id:         u32,
    pub current_inventory_bbl:  u64,
    pub available_capacity_bbl: u64,
}

impl ShipSnapshotRow {
    pub fn new(turn: u64, day: u32, ship: &Ship) -> Self {
        Self {
            turn,
            day,
            ship_id:                ship.id.0,
            name:                   ship.name.clone(),
            x:                      ship.position.x,
            y:                      ship.position.y,
            heading:                ship.heading,
            destination_id:         ship.destination.map_or(u32::MAX, |t| t.0),
            current_inventory_bbl:  ship.cargo.current_inventory_bbl,
            available_capacity_bbl: ship.cargo.available_capacity_bbl,
        }
    }
}

/// One executed month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummaryRow {
    pub turn:            u64,
    pub month:           &'static str,
    pub day_count:       u32,
    pub collision_days:  u32,
    /// `decision_totals` as a JSON object.
    pub decision_totals: String,
    /// RFC 3339 or empty for a month with no days.
    pub started_at:      String,
    pub finished_at:     String,
}

impl MonthSummaryRow {
    pub fn from_summary(summary: &MonthSummary) -> OutputResult<Self> {
        let stamp = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)).unwrap_or_default()
        };
        Ok(Self {
            turn:            summary.turn,
            month:           summary.month.name(),
            day_count:       summary.day_count,
            collision_days:  summary.collision_days,
            decision_totals: serde_json::to_string(&summary.decision_totals)?,
            started_at:      stamp(summary.started_at),
            finished_at:     stamp(summary.finished_at),
        })
    }
}
