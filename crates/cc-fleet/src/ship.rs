//! Ships: the only entities the navigator moves.

use cc_core::{Position, ShipId, TargetId};

/// Cargo figures shown in the host UI.  Carried through every step untouched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cargo {
    pub current_inventory_bbl:  u64,
    pub available_capacity_bbl: u64,
}

/// A ship as described by the host catalog, before name resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipSpec {
    pub name:        String,
    pub position:    Position,
    /// Degrees, 0 = north.
    pub heading:     f64,
    /// Target name; `None` means the ship is idle.
    pub destination: Option<String>,
    pub cargo:       Cargo,
}

impl ShipSpec {
    pub fn new(name: impl Into<String>, position: Position, heading: f64) -> Self {
        Self {
            name: name.into(),
            position,
            heading,
            destination: None,
            cargo: Cargo::default(),
        }
    }

    pub fn bound_for(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_cargo(mut self, cargo: Cargo) -> Self {
        self.cargo = cargo;
        self
    }
}

/// A resolved ship.  Only `position`, `heading`, and `cargo` change during a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    pub id:          ShipId,
    pub name:        String,
    pub position:    Position,
    pub heading:     f64,
    /// Resolved destination.  `None` keeps the ship where it is.
    pub destination: Option<TargetId>,
    pub cargo:       Cargo,
}

impl Ship {
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.destination.is_none()
    }

    /// Re-route (or idle, with `None`) the ship between turns.
    pub fn set_destination(&mut self, destination: Option<TargetId>) {
        self.destination = destination;
    }
}
