//! Scheduler observer trait for progress reporting and data collection.

use cc_core::Month;
use cc_fleet::Ship;
use cc_schedule::{DailyRecord, MonthSummary};
use serde_json::Value;

/// Callbacks invoked by [`TurnScheduler::advance_month`][crate::TurnScheduler::advance_month].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: month printer
///
/// ```rust,ignore
/// struct MonthPrinter;
///
/// impl TurnObserver for MonthPrinter {
///     fn on_month_end(&mut self, summary: &MonthSummary, _ships: &[Ship]) {
///         println!("{} done: {} days", summary.month, summary.day_count);
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called after the calendar advanced, before day 1.
    fn on_month_start(&mut self, _month: Month, _turn: u64, _decisions: &Value) {}

    /// Called after each day's record is built.  `ships` is the roster at
    /// the end of that day.
    fn on_day_end(&mut self, _record: &DailyRecord, _ships: &[Ship]) {}

    /// Called once the month has been aggregated.
    fn on_month_end(&mut self, _summary: &MonthSummary, _ships: &[Ship]) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
