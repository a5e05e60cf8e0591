//! `cc-fleet`: ships, stationary targets, and the resolved `Roster`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`ship`]    | `Ship`, `ShipSpec`, `Cargo`                                     |
//! | [`target`]  | `Target`, `TargetKind`, `TargetSpec`, `DockingPoint`            |
//! | [`roster`]  | `Roster`, `RosterBuilder`, `ResolvePolicy`, `UnresolvedRef`     |
//! | [`loader`]  | CSV catalog loaders for targets, docking points, and ships      |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                                  |
//!
//! # Name resolution
//!
//! Host catalogs refer to destinations by name.  [`RosterBuilder::build`]
//! turns every name into a [`TargetId`][cc_core::TargetId] exactly once and
//! applies docking-point overrides to island arrival points.  After that,
//! the simulation never compares strings.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | FxHash for the target name index.                         |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod loader;
pub mod roster;
pub mod ship;
pub mod target;

#[cfg(test)]
mod tests;

pub use error::{FleetError, FleetResult};
pub use loader::{
    load_docking_points_csv, load_docking_points_reader, load_ships_csv, load_ships_reader,
    load_targets_csv, load_targets_reader,
};
pub use roster::{ResolvePolicy, Roster, RosterBuilder, UnresolvedRef};
pub use ship::{Cargo, Ship, ShipSpec};
pub use target::{DockingPoint, Target, TargetKind, TargetSpec};
