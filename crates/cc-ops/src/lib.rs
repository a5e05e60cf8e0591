//! `cc-ops`: daily business-logic hooks.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`context`] | `DayContext<'a>`: read-only snapshot of one simulated day    |
//! | [`model`]   | `PortOperations` trait                                        |
//! | [`noop`]    | `LoggingOperations` (trait defaults), `NoopOperations`        |
//!
//! The scheduler calls the hooks after ships have moved for the day, in the
//! order `adjust_production_rates` then `process_port_operations`.  Neither
//! hook can fail or alter the ship roster; economic state belongs to the
//! implementor.

pub mod context;
pub mod model;
pub mod noop;


pub use context::DayContext;
pub use model::PortOperations;
pub use noop::{LoggingOperations, NoopOperations};
