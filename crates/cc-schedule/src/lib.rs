//! `cc-schedule`: month plans, the daily log, and month aggregation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`planning`]  | `PlanningSchedule` (`BTreeMap<Month, Value>`)             |
//! | [`daily_log`] | `DailyRecord`, `MonthLog`, `DailyLog` with retention      |
//! | [`aggregate`] | `MonthSummary`, `aggregate`                               |
//! | [`loader`]    | `load_plans_csv`, `load_plans_reader`                     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Decisions
//!
//! Decisions are opaque `serde_json::Value`s supplied by the host.  The only
//! place they are looked into is [`aggregate`], which sums numeric top-level
//! fields of object decisions for the month summary.

pub mod aggregate;
pub mod daily_log;
pub mod error;
pub mod loader;
pub mod planning;


pub use aggregate::{MonthSummary, aggregate};
pub use daily_log::{DailyLog, DailyRecord, MonthLog};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_plans_csv, load_plans_reader};
pub use planning::{PlanningSchedule, empty_decisions};
