//! CSV catalog loaders.
//!
//! # CSV formats
//!
//! Targets (`kind` is `terminal` or `island`):
//!
//! ```csv
//! name,kind,x,y,size
//! Calnera East,island,10,35,200
//! Deep Sea Terminal,terminal,50,20,80
//! ```
//!
//! Docking points:
//!
//! ```csv
//! name,x,y
//! Calnera East Dock,18,36
//! ```
//!
//! Ships (empty `destination` means idle; empty cargo columns mean 0):
//!
//! ```csv
//! name,x,y,heading,destination,current_inventory_bbl,available_capacity_bbl
//! VLCC Petromax,30,40,45,Calnera East Terminal 2,1500000,500000
//! MT Seabridge,15,45,70,,,
//! ```
//!
//! The loaders only parse.  Validation and name resolution happen in
//! [`RosterBuilder::build`][crate::RosterBuilder::build].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cc_core::Position;

use crate::{Cargo, DockingPoint, FleetError, ShipSpec, TargetKind, TargetSpec};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TargetRecord {
    name: String,
    kind: String,
    x:    f64,
    y:    f64,
    size: f64,
}

#[derive(Deserialize)]
struct DockRecord {
    name: String,
    x:    f64,
    y:    f64,
}

#[derive(Deserialize)]
struct ShipRecord {
    name:                   String,
    x:                      f64,
    y:                      f64,
    heading:                f64,
    destination:            Option<String>,
    current_inventory_bbl:  Option<u64>,
    available_capacity_bbl: Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_targets_csv(path: &Path) -> Result<Vec<TargetSpec>, FleetError> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> Result<Vec<TargetSpec>, FleetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<TargetRecord>()
        .map(|result| {
            let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
            let kind = TargetKind::parse(&row.kind).ok_or_else(|| {
                FleetError::Parse(format!(
                    "invalid kind {:?} for target {:?}: expected \"terminal\" or \"island\"",
                    row.kind, row.name
                ))
            })?;
            Ok(match kind {
                TargetKind::Terminal => TargetSpec::terminal(row.name, Position::new(row.x, row.y), row.size),
                TargetKind::Island   => TargetSpec::island(row.name, Position::new(row.x, row.y), row.size),
            })
        })
        .collect()
}

pub fn load_docking_points_csv(path: &Path) -> Result<Vec<DockingPoint>, FleetError> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_docking_points_reader(file)
}

pub fn load_docking_points_reader<R: Read>(reader: R) -> Result<Vec<DockingPoint>, FleetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<DockRecord>()
        .map(|result| {
            let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
            Ok(DockingPoint::new(row.name, Position::new(row.x, row.y)))
        })
        .collect()
}

pub fn load_ships_csv(path: &Path) -> Result<Vec<ShipSpec>, FleetError> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_ships_reader(file)
}

pub fn load_ships_reader<R: Read>(reader: R) -> Result<Vec<ShipSpec>, FleetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<ShipRecord>()
        .map(|result| {
            let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
            let mut spec = ShipSpec::new(row.name, Position::new(row.x, row.y), row.heading)
                .with_cargo(Cargo {
                    current_inventory_bbl:  row.current_inventory_bbl.unwrap_or(0),
                    available_capacity_bbl: row.available_capacity_bbl.unwrap_or(0),
                });
            spec.destination = row.destination.filter(|d| !d.trim().is_empty());
            Ok(spec)
        })
        .collect()
}
