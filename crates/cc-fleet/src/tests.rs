//! Unit tests for cc-fleet.

use cc_core::{Position, ShipId, TargetId};

use crate::{DockingPoint, RosterBuilder, ShipSpec, TargetSpec};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn calnera() -> RosterBuilder {
    RosterBuilder::new()
        .target(TargetSpec::island("Calnera East", Position::new(10.0, 35.0), 200.0))
        .target(TargetSpec::terminal("Calnera East Terminal 2", Position::new(10.0, 50.0), 80.0))
        .target(TargetSpec::terminal("Deep Sea Terminal", Position::new(50.0, 20.0), 80.0))
}

// ── Roster building ───────────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use super::*;
    use crate::{FleetError, ResolvePolicy};

    #[test]
    fn destinations_resolve_to_handles() {
        let (roster, ships) = calnera()
            .ship(ShipSpec::new("VLCC Oceanking", Position::new(60.0, 25.0), 315.0)
                .bound_for("Deep Sea Terminal"))
            .ship(ShipSpec::new("MT Seabridge", Position::new(15.0, 45.0), 70.0))
            .build()
            .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(ships[0].id, ShipId(0));
        assert_eq!(ships[0].destination, Some(TargetId(2)));
        assert!(ships[1].is_stationary());
        assert!(roster.unresolved().is_empty());
    }

    #[test]
    fn lenient_policy_records_unresolved() {
        let (roster, ships) = calnera()
            .ship(ShipSpec::new("Lost", Position::new(0.0, 0.0), 0.0).bound_for("Atlantis"))
            .build()
            .unwrap();

        assert!(ships[0].is_stationary());
        assert_eq!(roster.unresolved().len(), 1);
        assert_eq!(roster.unresolved()[0].ship, ShipId(0));
        assert_eq!(roster.unresolved()[0].destination, "Atlantis");
    }

    #[test]
    fn strict_policy_fails_on_unresolved() {
        let err = calnera()
            .policy(ResolvePolicy::Strict)
            .ship(ShipSpec::new("Lost", Position::new(0.0, 0.0), 0.0).bound_for("Atlantis"))
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::UnresolvedReference { .. }));
    }

    #[test]
    fn destination_match_is_exact() {
        // "Deep Sea" is a substring of a target name but not a target name.
        let (roster, ships) = calnera()
            .ship(ShipSpec::new("A", Position::new(0.0, 0.0), 0.0).bound_for("Deep Sea"))
            .build()
            .unwrap();
        assert!(ships[0].is_stationary());
        assert_eq!(roster.unresolved().len(), 1);
    }

    #[test]
    fn duplicate_target_names_rejected() {
        let err = calnera()
            .target(TargetSpec::terminal("Deep Sea Terminal", Position::new(1.0, 1.0), 80.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::DuplicateName { what: "target", .. }));
    }

    #[test]
    fn duplicate_ship_names_rejected() {
        let err = calnera()
            .ship(ShipSpec::new("Twin", Position::new(0.0, 0.0), 0.0))
            .ship(ShipSpec::new("Twin", Position::new(1.0, 0.0), 0.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::DuplicateName { what: "ship", .. }));
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        let err = RosterBuilder::new()
            .target(TargetSpec::island("Ghost", Position::new(f64::NAN, 0.0), 100.0))
            .build()
            .unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));

        let err = RosterBuilder::new()
            .target(TargetSpec::island("Negative", Position::new(0.0, 0.0), -5.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::Config(_)));
    }

    #[test]
    fn resolve_by_name_for_rerouting() {
        let (roster, mut ships) = calnera()
            .ship(ShipSpec::new("MT Voyager", Position::new(70.0, 55.0), 225.0))
            .build()
            .unwrap();
        let dest = roster.resolve("Calnera East Terminal 2");
        ships[0].set_destination(dest);
        assert_eq!(ships[0].destination, Some(TargetId(1)));
        assert_eq!(roster.resolve("Nowhere"), None);
    }
}

// ── Docking points ────────────────────────────────────────────────────────────

#[cfg(test)]
mod docking_tests {
    use super::*;

    #[test]
    fn docking_point_overrides_island_centre() {
        let dock = Position::new(18.0, 36.0);
        let (roster, _) = calnera()
            .docking_point(DockingPoint::new("Calnera East Dock", dock))
            .build()
            .unwrap();
        assert_eq!(roster.arrival_point(TargetId(0)), Some(dock));
        assert_eq!(roster.docking_point(TargetId(0)).unwrap().name, "Calnera East Dock");
    }

    #[test]
    fn terminals_ignore_docking_points() {
        let (roster, _) = calnera()
            .docking_point(DockingPoint::new("Deep Sea Terminal Dock", Position::new(0.0, 0.0)))
            .build()
            .unwrap();
        assert_eq!(roster.arrival_point(TargetId(2)), Some(Position::new(50.0, 20.0)));
        assert!(roster.docking_point(TargetId(2)).is_none());
    }

    #[test]
    fn undocked_island_uses_centre() {
        let (roster, _) = calnera()
            .docking_point(DockingPoint::new("Calnera South Dock", Position::new(0.0, 0.0)))
            .build()
            .unwrap();
        assert_eq!(roster.arrival_point(TargetId(0)), Some(Position::new(10.0, 35.0)));
    }

    #[test]
    fn first_matching_dock_wins() {
        let (roster, _) = calnera()
            .docking_point(DockingPoint::new("Calnera East Dock A", Position::new(1.0, 1.0)))
            .docking_point(DockingPoint::new("Calnera East Dock B", Position::new(2.0, 2.0)))
            .build()
            .unwrap();
        assert_eq!(roster.arrival_point(TargetId(0)), Some(Position::new(1.0, 1.0)));
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::{TargetKind, load_docking_points_reader, load_ships_reader, load_targets_reader};

    #[test]
    fn targets_parse() {
        let csv = "name,kind,x,y,size\nCalnera East,island,10,35,200\nDeep Sea Terminal,Terminal,50,20,80\n";
        let specs = load_targets_reader(Cursor::new(csv)).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].kind, TargetKind::Island);
        assert_eq!(specs[1].kind, TargetKind::Terminal);
        assert_eq!(specs[1].position.x, 50.0);
    }

    #[test]
    fn bad_kind_is_parse_error() {
        let csv = "name,kind,x,y,size\nReef,reef,1,1,1\n";
        assert!(load_targets_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn docks_parse() {
        let csv = "name,x,y\nCalnera East Dock,18,36\n";
        let docks = load_docking_points_reader(Cursor::new(csv)).unwrap();
        assert_eq!(docks[0].name, "Calnera East Dock");
        assert_eq!(docks[0].position.y, 36.0);
    }

    #[test]
    fn ships_parse_with_optional_columns() {
        let csv = "\
name,x,y,heading,destination,current_inventory_bbl,available_capacity_bbl
VLCC Petromax,30,40,45,Calnera East Terminal 2,1500000,500000
MT Seabridge,15,45,70,,,
";
        let ships = load_ships_reader(Cursor::new(csv)).unwrap();
        assert_eq!(ships.len(), 2);
        assert_eq!(ships[0].destination.as_deref(), Some("Calnera East Terminal 2"));
        assert_eq!(ships[0].cargo.current_inventory_bbl, 1_500_000);
        assert_eq!(ships[1].destination, None);
        assert_eq!(ships[1].cargo.available_capacity_bbl, 0);
    }
}
