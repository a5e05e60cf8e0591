//! `cc-core`: foundational types for the Crude Commander simulation core.
//!
//! This crate is a dependency of every other `cc-*` crate.  It intentionally
//! has no `cc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ShipId`, `TargetId`                                  |
//! | [`geo`]         | `Position`, `heading_deg`                             |
//! | [`time`]        | `Month`, `Calendar`, `DAYS_PER_MONTH`                 |
//! | [`config`]      | `NavParams`, `TurnConfig`, `Retention`                |
//! | [`error`]       | `CcError`, `CcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NavParams, Retention, TurnConfig};
pub use error::{CcError, CcResult};
pub use geo::{Position, heading_deg};
pub use ids::{ShipId, TargetId};
pub use time::{Calendar, DAYS_PER_MONTH, Month};
