//! `cc-sim`: the turn scheduler.
//!
//! # Month advance
//!
//! ```text
//! advance_month(ships):
//!   ① Calendar : index = (index + 1) mod 12 → new_month; turn += 1
//!   ② Decisions: planning schedule entry for new_month, or {}
//!   ③ Days     : for day in 1..=days_per_month:
//!                   update_ship_positions   (parallel with `parallel`)
//!                   adjust_production_rates
//!                   process_port_operations
//!                   append DailyRecord
//!   ④ Aggregate: MonthSummary of the month's records
//!   ⑤ Return   : new_month, future_month(planning_horizon), ships, summary
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Steps ships on Rayon's thread pool.                    |
//! | `serde`    | Serde derives on core, roster, and log types.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_fleet::RosterBuilder;
//! use cc_sim::{NoopObserver, SchedulerBuilder};
//!
//! let (roster, ships) = RosterBuilder::new().targets(targets).ships(specs).build()?;
//! let mut scheduler = SchedulerBuilder::new(roster).build()?;
//! scheduler.plan_for_month(scheduler.planning_month(), decisions);
//! let outcome = scheduler.advance_month(ships, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;


pub use builder::SchedulerBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TurnObserver};
pub use scheduler::{TurnOutcome, TurnScheduler};
